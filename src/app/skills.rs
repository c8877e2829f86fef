use leptos::prelude::*;

use crate::content::{CategoryFilter, Skill, SKILLS};

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="group p-6 rounded-xl border border-border/50 bg-card/80 backdrop-blur-sm hover:-translate-y-1 transition-all duration-300">
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center gap-3">
                    <div
                        class="w-10 h-10 rounded-lg flex items-center justify-center text-white font-bold"
                        style=format!("background-color: {}", skill.color)
                    >
                        {skill.name.chars().next().map(String::from).unwrap_or_default()}
                    </div>
                    <h4 class="font-semibold">{skill.name}</h4>
                </div>
                <span class="text-sm text-muted-foreground">{format!("{}%", skill.level)}</span>
            </div>
            <div class="h-2 rounded-full bg-muted overflow-hidden">
                <div
                    class="h-full rounded-full transition-all duration-1000"
                    style=format!("width: {}%; background-color: {}", skill.level, skill.color)
                ></div>
            </div>
            <p class="mt-3 text-xs text-muted-foreground">{skill.proficiency().label()}</p>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let (filter, set_filter) = signal(CategoryFilter::default());

    view! {
        <section id="skills" class="min-h-screen py-24 px-4 sm:px-8 bg-background">
            <div class="max-w-6xl mx-auto">
                <h3 class="mb-12 text-center text-xl sm:text-2xl font-medium tracking-[10px] sm:tracking-[20px] uppercase text-muted-foreground">
                    "Skills"
                </h3>
                <div class="flex flex-wrap justify-center gap-2 mb-12">
                    {CategoryFilter::options()
                        .map(|option| {
                            view! {
                                <button
                                    on:click=move |_| set_filter.set(option)
                                    class=move || {
                                        if filter.get() == option {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-primary text-primary-foreground transition-colors"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-muted/50 text-muted-foreground hover:text-foreground transition-colors"
                                        }
                                    }
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        filter
                            .get()
                            .filter(SKILLS)
                            .into_iter()
                            .map(|skill| view! { <SkillCard skill=*skill /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
