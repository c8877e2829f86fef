use leptos::{ev, html, prelude::*};
use leptos_use::use_resize_observer;

use crate::content::{NAV_ITEMS, OWNER};
use crate::sections::{
    Activation, FrameBatch, NavError, SectionRect, SectionTracker, TrackerConfig, Viewport,
};

/// Smooth-scroll the section with `id` into view.
pub fn scroll_to_section(id: &str) -> Result<(), NavError> {
    let el = document()
        .get_element_by_id(id)
        .ok_or_else(|| NavError::MissingTarget(id.to_string()))?;
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    Ok(())
}

/// Fire-and-forget navigation; a missing section is not the visitor's problem.
pub fn go_to_section(id: &str) {
    if let Err(e) = scroll_to_section(id) {
        log::debug!("ignoring navigation: {e}");
    }
}

fn measure() -> (Viewport, Vec<(&'static str, SectionRect)>) {
    let win = window();
    let viewport = Viewport {
        height: win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default(),
        scroll_y: win.scroll_y().unwrap_or_default(),
    };
    let doc = document();
    let rects = NAV_ITEMS
        .iter()
        .filter_map(|item| {
            let rect = doc.get_element_by_id(item.target)?.get_bounding_client_rect();
            Some((
                item.target,
                SectionRect {
                    top: rect.top(),
                    bottom: rect.bottom(),
                },
            ))
        })
        .collect();
    (viewport, rects)
}

/// `content` wraps every section; its size changes move sections without a scroll.
#[component]
pub fn Navigation(content: NodeRef<html::Main>) -> impl IntoView {
    // the timeline is taller than the viewport, so it uses the probe line
    let tracker = StoredValue::new(
        SectionTracker::new(NAV_ITEMS.iter().map(|n| n.target), TrackerConfig::default())
            .with_activation("experience", Activation::ProbeLine),
    );
    let batch = StoredValue::new(FrameBatch::default());
    let frame = StoredValue::new(None::<AnimationFrameRequestHandle>);
    let (active, set_active) = signal(NAV_ITEMS[0].target.to_string());
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let recompute = move || {
        let (viewport, rects) = measure();
        let state = tracker.try_update_value(|t| {
            let seen = t.observe(viewport, rects.iter().map(|(id, r)| (*id, *r)));
            (seen, t.active().to_string(), t.scrolled())
        });
        if let Some((seen, id, is_scrolled)) = state {
            if seen.active_changed {
                set_active.set(id);
            }
            if seen.scrolled_changed {
                set_scrolled.set(is_scrolled);
            }
        }
    };

    // never measure inside the scroll handler itself; coalesce into the next frame
    let schedule = move || {
        if !batch.try_update_value(|b| b.request()).unwrap_or(false) {
            return;
        }
        let handle = request_animation_frame_with_handle(move || {
            frame.try_update_value(|f| *f = None);
            batch.try_update_value(|b| b.begin_frame());
            recompute();
        });
        match handle {
            Ok(h) => {
                frame.try_update_value(|f| *f = Some(h));
            }
            Err(e) => {
                log::error!("failed to request animation frame: {e:?}");
                batch.try_update_value(FrameBatch::abandon);
            }
        }
    };

    Effect::watch(
        || (),
        move |_, _, _| {
            recompute();
            let on_scroll = window_event_listener(ev::scroll, move |_| schedule());
            let on_resize = window_event_listener(ev::resize, move |_| schedule());
            on_cleanup(move || {
                on_scroll.remove();
                on_resize.remove();
                if let Some(Some(h)) = frame.try_update_value(Option::take) {
                    h.cancel();
                }
                batch.try_update_value(FrameBatch::abandon);
            });
        },
        true,
    );

    // filtered skills, mounting hero text and the like
    use_resize_observer(content, move |_, _| schedule());

    let select = move |target: &'static str| {
        go_to_section(target);
        set_menu_open.set(false);
    };

    let nav_button = move |label: &'static str, target: &'static str| {
        view! {
            <button
                on:click=move |_| select(target)
                class=move || {
                    if active.get() == target {
                        "px-4 py-2 text-sm font-medium rounded-full transition-all duration-300 bg-primary/10 text-primary"
                    } else {
                        "px-4 py-2 text-sm font-medium rounded-full transition-all duration-300 text-muted-foreground hover:text-foreground hover:bg-muted/50"
                    }
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-background/75 backdrop-blur-md border-b border-border/50 shadow-lg"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-transparent"
            }
        }>
            <div class="container mx-auto px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        on:click=move |_| select("hero")
                        class="text-lg font-semibold hover:scale-105 transition-transform"
                    >
                        {OWNER}
                    </button>
                    <div class="hidden md:flex items-center space-x-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| nav_button(item.label, item.target))
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden h-9 w-9"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden pb-4 mt-2 rounded-lg border border-border/50 bg-background/90 backdrop-blur-sm">
                        <div class="p-4 space-y-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    let target = item.target;
                                    view! {
                                        <button
                                            on:click=move |_| select(target)
                                            class="block w-full text-left py-3 px-4 rounded-lg font-medium hover:text-primary hover:bg-primary/5 transition-colors"
                                        >
                                            {item.label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
