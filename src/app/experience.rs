use leptos::prelude::*;

use crate::content::{TimelineEntry, TIMELINE};

#[component]
fn TimelineItem(entry: TimelineEntry, index: usize) -> impl IntoView {
    // alternate sides on wide screens
    let side = if index % 2 == 0 {
        "md:pr-12 md:text-right md:mr-auto"
    } else {
        "md:pl-12 md:ml-auto"
    };

    view! {
        <div class=format!("relative mb-12 md:w-1/2 pl-12 md:pl-0 {side}")>
            <div class="absolute left-0 md:left-auto top-1 w-8 h-8 rounded-full flex items-center justify-center bg-primary/10 border border-primary/40">
                {entry.kind.icon()}
            </div>
            <span class="text-sm font-medium text-primary">{entry.date}</span>
            <h4 class="mt-1 text-lg font-semibold">{entry.title}</h4>
            <p class="mt-2 text-sm text-muted-foreground">{entry.description}</p>
            <Show when=move || !entry.technologies.is_empty()>
                <div class="flex flex-wrap gap-2 mt-3 md:justify-end">
                    {entry
                        .technologies
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-2 py-1 text-xs rounded-full bg-muted/60">{*t}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
            {entry
                .link
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block mt-3 text-sm text-primary hover:underline"
                        >
                            "View"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="min-h-screen py-24 px-4 sm:px-8 bg-background">
            <div class="max-w-5xl mx-auto">
                <h3 class="mb-16 text-center text-xl sm:text-2xl font-medium tracking-[10px] sm:tracking-[20px] uppercase text-muted-foreground">
                    "Experience"
                </h3>
                <div class="relative">
                    <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-px bg-border"></div>
                    {TIMELINE
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <TimelineItem entry=*entry index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
