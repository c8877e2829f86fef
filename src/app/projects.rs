use leptos::{html, prelude::*};
use leptos_use::use_element_hover;

use crate::carousel::{Carousel, CarouselConfig, Move, PauseSources};
use crate::content::{Project, PROJECTS};
use crate::timers::{now, TimerDriver};
use crate::timing::Timestamp;

#[component]
fn ProjectCard(project: Project, #[prop(optional)] featured: bool) -> impl IntoView {
    let width = if featured { "w-full lg:w-96" } else { "w-80" };
    view! {
        <div class=format!(
            "{width} bg-card/80 backdrop-blur-sm border border-border/50 rounded-lg overflow-hidden transition-all duration-300",
        )>
            <div class="h-64 bg-gradient-to-br from-muted/50 to-muted/30 flex items-center justify-center">
                <img src=project.image alt=project.title class="w-full h-full object-cover" />
            </div>
            <div class="p-6">
                <div class="flex items-center justify-between mb-2 text-xs text-muted-foreground">
                    <span>{project.category}</span>
                    <span>{project.year}</span>
                </div>
                <h4 class="text-lg font-semibold mb-2">{project.title}</h4>
                <p class="text-sm text-muted-foreground line-clamp-2">{project.description}</p>
                {featured
                    .then(|| {
                        view! {
                            <p class="mt-3 text-sm font-medium">{project.status}</p>
                            <div class="flex flex-wrap gap-2 mt-4">
                                {project
                                    .tech
                                    .iter()
                                    .map(|t| {
                                        view! {
                                            <span class="px-2 py-1 text-xs rounded-full bg-primary/10 text-primary">
                                                {*t}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="flex gap-4 mt-4 text-sm">
                                <a
                                    href=project.github_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-primary"
                                >
                                    "Code"
                                </a>
                                <a
                                    href=project.live_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-primary"
                                >
                                    "Live"
                                </a>
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let carousel = Carousel::new(PROJECTS.len(), CarouselConfig::default(), now());
    let (state, set_state) = signal(carousel.state());
    let driver = TimerDriver::new(carousel, move |c: &Carousel, event| {
        log::debug!("carousel: {event:?}");
        set_state.set(c.state());
    });
    let sync = move || {
        if let Some(s) = driver.with(Carousel::state) {
            set_state.set(s);
        }
    };

    // every manual navigation also holds off autoplay for the cooldown
    let navigate = move |f: fn(&mut Carousel, Timestamp) -> Move| {
        driver.update(|c, now| {
            f(c, now);
            c.user_interacted(now);
        });
        sync();
    };
    let previous = move || navigate(Carousel::previous);
    let next = move || navigate(Carousel::next);
    let go_to = move |index: usize| {
        driver.update(|c, now| {
            c.go_to(now, index);
            c.user_interacted(now);
        });
        sync();
    };

    let container = NodeRef::<html::Div>::new();
    let hovered = use_element_hover(container);
    let (pause, set_pause) = signal(PauseSources::default());
    Effect::new(move |_| {
        let hovered = hovered.get();
        set_pause.update(|p| p.hovered = hovered);
    });
    Effect::new(move |_| {
        let paused = pause.get().paused();
        driver.update(|c, now| c.set_paused(now, paused));
        sync();
    });
    let on_focus = move |ev: leptos::ev::FocusEvent| {
        let visible = event_target::<web_sys::Element>(&ev)
            .matches(":focus-visible")
            .unwrap_or(false);
        set_pause.update(|p| p.focus(visible));
    };

    let cards = move || {
        state.track();
        driver
            .with(Carousel::window)
            .flatten()
            .map(|w| (PROJECTS[w.previous], PROJECTS[w.current], PROJECTS[w.next]))
    };
    let transitioning = move || state.get().transitioning;

    view! {
        <section
            id="projects"
            class="min-h-screen flex flex-col items-center justify-center relative overflow-hidden bg-background"
        >
            <h3 class="absolute top-16 sm:top-32 text-xl sm:text-2xl font-medium tracking-[10px] sm:tracking-[20px] uppercase text-muted-foreground z-10">
                "Projects"
            </h3>
            <div
                node_ref=container
                on:focusin=on_focus
                on:focusout=move |_| set_pause.update(PauseSources::blur)
                class="w-full max-w-7xl mx-auto px-4 sm:px-8 flex items-center justify-center gap-4 sm:gap-8"
            >
                <div class="hidden lg:block cursor-pointer scale-75 opacity-40 hover:opacity-60 transition-all" on:click=move |_| previous()>
                    {move || cards().map(|(p, _, _)| view! { <ProjectCard project=p /> })}
                </div>
                <button
                    class="lg:hidden flex items-center justify-center w-12 h-12 rounded-full border border-border/50 bg-card/80 hover:text-primary disabled:opacity-50"
                    aria-label="Previous project"
                    disabled=transitioning
                    on:click=move |_| previous()
                >
                    "‹"
                </button>
                <div class="relative z-10 flex-1 lg:flex-none">
                    {move || cards().map(|(_, p, _)| view! { <ProjectCard project=p featured=true /> })}
                </div>
                <button
                    class="lg:hidden flex items-center justify-center w-12 h-12 rounded-full border border-border/50 bg-card/80 hover:text-primary disabled:opacity-50"
                    aria-label="Next project"
                    disabled=transitioning
                    on:click=move |_| next()
                >
                    "›"
                </button>
                <div class="hidden lg:block cursor-pointer scale-75 opacity-40 hover:opacity-60 transition-all" on:click=move |_| next()>
                    {move || cards().map(|(_, _, p)| view! { <ProjectCard project=p /> })}
                </div>
            </div>
            <div class="flex gap-2 mt-8 z-10">
                {(0..PROJECTS.len())
                    .map(|index| {
                        view! {
                            <button
                                aria-label=format!("Show project {}", index + 1)
                                disabled=transitioning
                                on:click=move |_| go_to(index)
                                class=move || {
                                    let s = state.get();
                                    let base = if index == s.current {
                                        "h-2 rounded-full transition-all duration-300 bg-primary w-6 sm:w-8"
                                    } else {
                                        "h-2 w-2 rounded-full transition-all duration-300 bg-muted-foreground/30 hover:bg-muted-foreground/50"
                                    };
                                    if s.transitioning {
                                        format!("{base} opacity-50 cursor-not-allowed")
                                    } else {
                                        base.to_string()
                                    }
                                }
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex items-center gap-2 mt-4 text-xs text-muted-foreground/60">
                {move || {
                    let s = state.get();
                    let running = s.autoplay_enabled && !s.paused;
                    view! {
                        <div class=if running {
                            "w-2 h-2 rounded-full bg-primary animate-pulse"
                        } else {
                            "w-2 h-2 rounded-full bg-muted-foreground/30"
                        }></div>
                        <span class="hidden sm:inline">
                            {if running { "Auto scrolling" } else { "Paused" }}
                        </span>
                    }
                }}
            </div>
        </section>
    }
}
