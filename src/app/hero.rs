use std::time::Duration;

use leptos::prelude::*;

use super::navigation::go_to_section;
use crate::content::{FIRST_NAME, GREETING, LAST_NAME, ROLES, ROLE_PREFIX};
use crate::timers::{now, TimerDriver};
use crate::typewriter::{
    CyclingConfig, CyclingTypewriter, Typewriter, TypewriterConfig, TypewriterState,
};

#[component]
pub fn TypewriterText(
    #[prop(into)] text: String,
    #[prop(default = Duration::ZERO)] delay: Duration,
    #[prop(default = Duration::from_millis(100))] speed: Duration,
    #[prop(optional)] on_complete: Option<Callback<()>>,
) -> impl IntoView {
    let (shown, set_shown) = signal(String::new());
    let typewriter = Typewriter::new(TypewriterConfig { text, delay, speed }, now());
    TimerDriver::new(typewriter, move |tw: &Typewriter, state: TypewriterState| {
        set_shown.set(tw.text().to_string());
        if state.complete {
            if let Some(cb) = on_complete {
                cb.run(());
            }
        }
    });

    view! { <span>{shown}</span> }
}

#[component]
pub fn CyclingTypewriterText(
    #[prop(into)] prefix: String,
    words: Vec<String>,
    #[prop(default = Duration::ZERO)] delay: Duration,
) -> impl IntoView {
    let (prefix_shown, set_prefix_shown) = signal(String::new());
    let (word_shown, set_word_shown) = signal(String::new());
    let config = CyclingConfig {
        prefix,
        words,
        delay,
        ..Default::default()
    };
    TimerDriver::new(
        CyclingTypewriter::new(config, now()),
        move |ct: &CyclingTypewriter, _| {
            set_prefix_shown.set(ct.prefix_text().to_string());
            set_word_shown.set(ct.word_text().to_string());
        },
    );

    view! {
        <span>
            {prefix_shown}
            <span class="text-primary font-semibold">
                {word_shown} <span class="inline-block w-0.5 h-8 bg-primary ml-1 animate-pulse"></span>
            </span>
        </span>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let (show_name, set_show_name) = signal(false);
    let (show_roles, set_show_roles) = signal(false);

    view! {
        <section
            id="hero"
            class="min-h-screen flex items-center justify-center relative overflow-hidden hero-gradient"
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-20 left-20 w-16 h-16 rounded-3xl rotate-45 border border-violet-500/30 bg-violet-500/20 float-slow"></div>
                <div class="absolute top-40 right-32 w-24 h-24 rounded-full border border-emerald-500/30 bg-emerald-500/20 float-medium"></div>
                <div class="absolute bottom-20 right-20 w-32 h-8 rounded-full border border-cyan-500/30 bg-cyan-500/20 float-fast"></div>
            </div>
            <div class="relative z-10 text-center px-4 sm:px-6 lg:px-8">
                <div class="mb-6 text-2xl text-muted-foreground font-semibold">
                    <TypewriterText
                        text=GREETING
                        delay=Duration::from_millis(800)
                        on_complete=Callback::new(move |_| set_show_name.set(true))
                    />
                </div>
                <h1 class="mb-8 font-bold text-4xl lg:text-6xl leading-tight name-gradient min-h-20">
                    <Show when=move || show_name.get()>
                        <div class="flex flex-col items-center gap-1">
                            <TypewriterText text=FIRST_NAME delay=Duration::from_millis(200) />
                            <TypewriterText
                                text=LAST_NAME
                                delay=Duration::from_millis(800)
                                speed=Duration::from_millis(80)
                                on_complete=Callback::new(move |_| set_show_roles.set(true))
                            />
                        </div>
                    </Show>
                </h1>
                <p class="max-w-3xl mx-auto px-4 text-2xl text-muted-foreground font-semibold min-h-16">
                    <Show when=move || show_roles.get()>
                        <CyclingTypewriterText
                            prefix=ROLE_PREFIX
                            words=ROLES.iter().map(|w| w.to_string()).collect()
                            delay=Duration::from_millis(500)
                        />
                    </Show>
                </p>
                <div class="flex flex-col sm:flex-row gap-4 sm:gap-6 justify-center items-center my-16 px-4">
                    <button
                        class="px-8 py-4 rounded-full text-white font-semibold bg-gradient-to-r from-purple-600 to-pink-600 hover:scale-105 transition-transform"
                        on:click=move |_| go_to_section("projects")
                    >
                        "Explore My Work"
                    </button>
                    <button
                        class="px-8 py-4 rounded-full font-semibold border-2 border-primary/50 hover:bg-primary/10 transition-all"
                        on:click=move |_| go_to_section("contact")
                    >
                        "Let's Connect"
                    </button>
                </div>
                <button
                    class="flex flex-col items-center gap-2 mx-auto text-muted-foreground hover:text-primary transition-colors animate-bounce"
                    on:click=move |_| go_to_section("skills")
                >
                    <span class="text-sm font-medium">"Scroll to explore"</span>
                </button>
            </div>
        </section>
    }
}
