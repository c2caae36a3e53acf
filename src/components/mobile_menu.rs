use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::navbar::NAV_LINKS;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub on_close: Callback<MouseEvent>,
}

/// Slide-in panel for narrow viewports. Closes on backdrop click, the
/// close button, or any link.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let on_close = props.on_close.clone();

    let backdrop_close = {
        let on_close = on_close.clone();
        Callback::from(move |e: MouseEvent| on_close.emit(e))
    };

    html! {
        <>
            <div class="mobile-backdrop" onclick={backdrop_close}></div>
            <div class="mobile-menu">
                <button
                    class="mobile-menu-close"
                    onclick={on_close.clone()}
                    aria-label="Close Menu"
                >
                    {"✕"}
                </button>
                <ul class="mobile-menu-links">
                    {
                        NAV_LINKS.iter().map(|(name, href)| {
                            let on_close = on_close.clone();
                            html! {
                                <li key={*name}>
                                    <a
                                        href={*href}
                                        onclick={Callback::from(move |e: MouseEvent| on_close.emit(e))}
                                    >
                                        { name }
                                    </a>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>
            </div>
        </>
    }
}
