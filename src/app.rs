mod contact;
mod experience;
mod hero;
mod navigation;
mod projects;
mod skills;

use contact::Contact;
use experience::Experience;
use hero::Hero;
use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use navigation::Navigation;
use projects::Projects;
use skills::Skills;

use crate::content::{GITHUB_URL, OWNER};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=OWNER />
        <Meta name="description" content=format!("{OWNER}: developer portfolio") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let content = NodeRef::<html::Main>::new();

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <Navigation content=content />
            <main node_ref=content class="snap-y snap-mandatory">
                <div class="snap-start">
                    <Hero />
                </div>
                <div class="snap-start">
                    <Skills />
                </div>
                <div class="snap-start">
                    <Projects />
                </div>
                <div class="snap-start">
                    <Experience />
                </div>
                <div class="snap-start">
                    <Contact />
                </div>
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-border/50 text-center text-sm text-muted-foreground">
            <p>
                {format!("© {OWNER}")} " · "
                <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-primary">
                    "GitHub"
                </a>
            </p>
            <p class="mt-1 text-xs">{format!("Built {}", env!("BUILD_TIME"))}</p>
        </footer>
    }
}
