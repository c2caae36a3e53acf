use yew::prelude::*;

use crate::config;
use crate::effects::use_in_view;

const FEATURES: &[&str] = &[
    "Full-Service Automotive Facility with 7 Service Bays",
    "Licensed & Experienced Mechanics",
    "Certified Safety Inspection Facility",
    "European & Exotic Car Specialists",
    "Advanced Diagnostics Equipment",
    "Custom Performance Builds",
];

const STATS: &[(&str, &str)] = &[
    ("7", "Service Bays"),
    ("100%", "Certified"),
    ("1000+", "Cars Serviced"),
    ("15+", "Years Experience"),
];

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_node_ref();
    let phase = use_in_view(&section_ref);

    html! {
        <section id="about" class="about">
            <div class="about-backdrop"></div>
            <div class="container about-layout" ref={section_ref}>
                <div class={classes!("about-copy", phase.class())}>
                    <h2 class="about-title">{ config::SHOP_NAME }</h2>
                    <p>
                        {"Located in the heart of Ajax, Ontario, we take pride in being a \
                         full-service automotive facility. Our shop features 7 fully \
                         equipped service bays, handling everything from routine \
                         maintenance to advanced diagnostics and performance builds."}
                    </p>

                    <div class="about-stats">
                        {
                            STATS.iter().enumerate().map(|(i, (value, label))| {
                                let style = format!("transition-delay: {}ms;", i * 120);
                                html! {
                                    <div key={*label} class={classes!("stat-tile", phase.class())} {style}>
                                        <span class="stat-value">{ value }</span>
                                        <span class="stat-label">{ label }</span>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="about-features">
                        {
                            FEATURES.iter().enumerate().map(|(i, feature)| {
                                let style = format!("transition-delay: {}ms;", 200 + i * 100);
                                html! {
                                    <div key={*feature} class={classes!("feature-row", phase.class())} {style}>
                                        <span class="feature-check">{"✓"}</span>
                                        <p>{ feature }</p>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class={classes!("about-photo", phase.class())}>
                    <div class="about-photo-frame">
                        <img
                            src="https://images.pexels.com/photos/3807329/pexels-photo-3807329.jpeg"
                            alt="Performance car showcase"
                        />
                        <div class="about-photo-caption">
                            <p>{"Featured: Custom-tuned Sports Cars"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
