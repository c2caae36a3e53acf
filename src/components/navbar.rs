use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::mobile_menu::MobileMenu;
use crate::config;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Services", "#services"),
    ("About", "#about"),
    ("Partners", "#partners"),
    ("Contact", "#contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > config::NAV_SCROLL_THRESHOLD);
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| {
            menu_open.set(false);
        })
    };

    // Decorative speed-line strip, only visible once the bar compacts.
    let speed_lines = (0..10)
        .map(|i| {
            let style = format!(
                "left: {}%; animation-delay: {}ms;",
                i * 10,
                i * 100
            );
            html! { <span key={i} class="speed-line" {style}></span> }
        })
        .collect::<Html>();

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="speed-strip">{ speed_lines }</div>
            <nav class="nav-content">
                <a href="#home" class="nav-logo">{ config::SHOP_NAME }</a>

                <ul class="nav-links">
                    {
                        NAV_LINKS.iter().map(|(name, href)| html! {
                            <li key={*name}>
                                <a href={*href} class="nav-link">{ name }</a>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={if *menu_open { "Close Menu" } else { "Open Menu" }}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            {
                if *menu_open {
                    html! { <MobileMenu on_close={close_menu} /> }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
