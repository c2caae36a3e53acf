use chrono::{Datelike, Utc};
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Services", "#services"),
    ("About", "#about"),
    ("Partners", "#partners"),
    ("Contact", "#contact"),
];

const SERVICE_LINKS: &[&str] = &[
    "Customization",
    "Performance",
    "Maintenance",
    "ECU Tuning",
    "Safety Inspections",
];

const SOCIALS: &[(&str, &str)] = &[
    ("Facebook", "FB"),
    ("Instagram", "IG"),
    ("Twitter", "TW"),
    ("YouTube", "YT"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let scroll_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let mut options = ScrollToOptions::new();
            options.top(0.0).behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a href="#home" class="footer-logo">{ config::SHOP_NAME }</a>
                        <p>
                            {"Premium automotive services with a focus on quality, precision, \
                             and customer satisfaction. From routine maintenance to custom \
                             performance builds."}
                        </p>
                        <div class="footer-socials">
                            {
                                SOCIALS.iter().map(|(name, short)| html! {
                                    <a key={*name} href="#" class="footer-social" aria-label={*name}>
                                        { short }
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="footer-column">
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            {
                                QUICK_LINKS.iter().map(|(name, href)| html! {
                                    <li key={*name}><a href={*href}>{ name }</a></li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h3>{"Services"}</h3>
                        <ul>
                            {
                                SERVICE_LINKS.iter().map(|name| html! {
                                    <li key={*name}><a href="#services">{ name }</a></li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{ format!("© {} {}. All rights reserved.", year, config::SHOP_NAME) }</p>
                    <button
                        class="footer-top-button"
                        onclick={scroll_to_top}
                        aria-label="Scroll to top"
                    >
                        {"↑"}
                    </button>
                </div>
            </div>
        </footer>
    }
}
