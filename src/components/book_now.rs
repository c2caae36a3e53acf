use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

/// Floating action cluster that appears once the visitor scrolls past the
/// hero: a back-to-top button and a "Book Now" link to the contact form.
#[function_component(BookNow)]
pub fn book_now() -> Html {
    let visible = use_state(|| false);
    let show_tooltip = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    visible.set(offset > config::BOOK_NOW_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let scroll_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let mut options = ScrollToOptions::new();
            options.top(0.0).behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let tooltip_on = {
        let show_tooltip = show_tooltip.clone();
        Callback::from(move |_: MouseEvent| show_tooltip.set(true))
    };
    let tooltip_off = {
        let show_tooltip = show_tooltip.clone();
        Callback::from(move |_: MouseEvent| show_tooltip.set(false))
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="book-now-cluster">
            <button
                class="to-top-button"
                onclick={scroll_to_top}
                aria-label="Scroll to top"
            >
                {"↑"}
            </button>
            <div class="book-now-anchor">
                {
                    if *show_tooltip {
                        html! {
                            <div class="book-now-tooltip">
                                <span>{"Schedule Your Appointment"}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <a
                    href="#contact"
                    class="book-now-button"
                    onmouseenter={tooltip_on}
                    onmouseleave={tooltip_off}
                >
                    {"Book Now"}
                </a>
            </div>
        </div>
    }
}
