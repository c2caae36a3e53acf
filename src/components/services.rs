use yew::prelude::*;

use crate::effects::use_in_view;

struct Service {
    title: &'static str,
    description: &'static str,
    // Path data for a 24x24 stroke icon.
    icon: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Customization",
        description: "Custom body kits, interior modifications, and personalized styling solutions.",
        icon: "M3.75 6A2.25 2.25 0 016 3.75h2.25A2.25 2.25 0 0110.5 6v2.25a2.25 2.25 0 01-2.25 2.25H6a2.25 2.25 0 01-2.25-2.25V6zM13.5 6a2.25 2.25 0 012.25-2.25H18A2.25 2.25 0 0120.25 6v2.25A2.25 2.25 0 0118 10.5h-2.25a2.25 2.25 0 01-2.25-2.25V6zM3.75 15.75A2.25 2.25 0 016 13.5h2.25a2.25 2.25 0 012.25 2.25V18a2.25 2.25 0 01-2.25 2.25H6A2.25 2.25 0 013.75 18v-2.25zM13.5 15.75a2.25 2.25 0 012.25-2.25H18a2.25 2.25 0 012.25 2.25V18A2.25 2.25 0 0118 20.25h-2.25A2.25 2.25 0 0113.5 18v-2.25z",
    },
    Service {
        title: "Maintenance",
        description: "Regular maintenance and preventive care to keep your vehicle in top condition.",
        icon: "M11.42 15.17L17.25 21A2.652 2.652 0 0021 17.25l-5.877-5.877M11.42 15.17l2.496-3.03c.317-.384.74-.626 1.208-.766M11.42 15.17l-4.655 5.653a2.548 2.548 0 11-3.586-3.586l6.837-5.63m5.108-.233c.55-.164 1.163-.188 1.743-.14a4.5 4.5 0 004.486-6.336l-3.276 3.277a3.004 3.004 0 01-2.25-2.25l3.276-3.276a4.5 4.5 0 00-6.336 4.486c.091 1.076-.071 2.264-.904 2.95l-.102.085",
    },
    Service {
        title: "Performance",
        description: "Performance upgrades to enhance your vehicle's power, handling, and capabilities.",
        icon: "M8.25 18.75a1.5 1.5 0 01-3 0m3 0a1.5 1.5 0 00-3 0m3 0h6m-9 0H3.375a1.125 1.125 0 01-1.125-1.125V14.25m17.25 4.5a1.5 1.5 0 01-3 0m3 0a1.5 1.5 0 00-3 0m3 0h1.125c.621 0 1.129-.504 1.09-1.124a17.902 17.902 0 00-3.213-9.193 2.056 2.056 0 00-1.58-.86H14.25M16.5 18.75h-2.25m0-11.177v-.958c0-.568-.422-1.048-.987-1.106a48.554 48.554 0 00-10.026 0 1.106 1.106 0 00-.987 1.106v7.635m12-6.677v6.677m0 4.5v-4.5m0 0h-12",
    },
    Service {
        title: "Wheels & Tires",
        description: "Premium wheel and tire packages tailored to your vehicle and driving style.",
        icon: "M12 21a9 9 0 100-18 9 9 0 000 18zm0-5.25a3.75 3.75 0 100-7.5 3.75 3.75 0 000 7.5zM12 3v4.5m0 9V21m9-9h-4.5m-9 0H3",
    },
    Service {
        title: "Brakes",
        description: "High-performance brake systems for improved stopping power and safety.",
        icon: "M3.75 12h2.25l2.25-6 3 12 2.25-9 1.5 3h5.25",
    },
    Service {
        title: "Suspension",
        description: "Custom suspension setups for optimal handling and ride comfort.",
        icon: "M10.5 6a7.5 7.5 0 107.5 7.5h-7.5V6z M13.5 10.5H21A7.5 7.5 0 0013.5 3v7.5z",
    },
    Service {
        title: "Oil & Filter",
        description: "Premium oil changes and filter replacements using high-quality products.",
        icon: "M12 3.75c2.9 3.2 5.25 6.27 5.25 9A5.25 5.25 0 016.75 12.75c0-2.73 2.35-5.8 5.25-9z",
    },
    Service {
        title: "ECU Tuning",
        description: "Professional ECU tuning for optimized performance and efficiency.",
        icon: "M8.25 3v2.25M15.75 3v2.25M8.25 18.75V21M15.75 18.75V21M3 8.25h2.25M3 15.75h2.25M18.75 8.25H21M18.75 15.75H21M6.75 6.75h10.5v10.5H6.75V6.75z",
    },
];

fn icon_svg(path: &'static str) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="service-icon"
        >
            <path d={path} />
        </svg>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();
    let phase = use_in_view(&section_ref);

    html! {
        <section id="services" class="services">
            <div class="container" ref={section_ref}>
                <div class={classes!("section-heading", phase.class())}>
                    <h2>{"Our Services"}</h2>
                    <p>{"Premium automotive services delivered with precision and expertise"}</p>
                </div>
                <div class="services-grid">
                    {
                        SERVICES.iter().enumerate().map(|(i, service)| {
                            // Stagger the card entries by grid position.
                            let style = format!("transition-delay: {}ms;", i * 150);
                            html! {
                                <div
                                    key={service.title}
                                    class={classes!("service-card", phase.class())}
                                    {style}
                                >
                                    { icon_svg(service.icon) }
                                    <h3>{ service.title }</h3>
                                    <p>{ service.description }</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
