use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::effects::use_in_view;

/// Assembles the `mailto:` URL the form submits through. No backend
/// exists, so the visitor's own mail client carries the message.
pub fn mailto_url(to: &str, name: &str, email: &str, message: &str) -> String {
    let subject = format!("Website inquiry from {}", name);
    let body = format!("{}\n\nReply to: {} <{}>", message, name, email);
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section_ref = use_node_ref();
    let phase = use_in_view(&section_ref);

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();
    let notice = use_state(|| None::<String>);

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
                notice.set(Some("Please fill in your name, email and message.".to_string()));
                return;
            }
            notice.set(None);

            let url = mailto_url(config::SHOP_EMAIL, name.trim(), email.trim(), message.trim());
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        })
    };

    let info_tiles = [
        ("Our Location", vec![config::SHOP_ADDRESS.to_string()]),
        ("Phone", vec![config::SHOP_PHONE.to_string()]),
        ("Email", vec![config::SHOP_EMAIL.to_string()]),
        (
            "Hours",
            vec![
                "Monday-Friday: 8am - 6pm".to_string(),
                "Saturday: 9am - 4pm".to_string(),
                "Sunday: Closed".to_string(),
            ],
        ),
    ];

    html! {
        <section id="contact" class="contact">
            <div class="container" ref={section_ref}>
                <div class={classes!("section-heading", phase.class())}>
                    <h2>{"Contact Us"}</h2>
                    <p>{"Get in touch with our expert team"}</p>
                </div>

                <div class="contact-layout">
                    <div class="contact-info">
                        {
                            info_tiles.iter().enumerate().map(|(i, (title, lines))| {
                                let style = format!("transition-delay: {}ms;", i * 120);
                                html! {
                                    <div key={*title} class={classes!("contact-tile", phase.class())} {style}>
                                        <h3>{ title }</h3>
                                        { lines.iter().map(|line| html! { <p>{ line }</p> }).collect::<Html>() }
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <div class={classes!("contact-form-panel", phase.class())}>
                        <h3>{"Send Us a Message"}</h3>
                        <form onsubmit={on_submit}>
                            <div class="form-field">
                                <label for="name">{"Your Name"}</label>
                                <input ref={name_ref} type="text" id="name" />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email Address"}</label>
                                <input ref={email_ref} type="email" id="email" />
                            </div>
                            <div class="form-field">
                                <label for="message">{"Message"}</label>
                                <textarea ref={message_ref} id="message" rows="4"></textarea>
                            </div>
                            {
                                if let Some(text) = notice.as_ref() {
                                    html! { <p class="form-notice">{ text }</p> }
                                } else {
                                    html! {}
                                }
                            }
                            <button type="submit" class="form-submit">{"Send Message"}</button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject_and_body() {
        let url = mailto_url("shop@example.com", "Sam Reyes", "sam@example.com", "Brake inquiry");
        assert!(url.starts_with("mailto:shop@example.com?subject="));
        assert!(url.contains("Website%20inquiry%20from%20Sam%20Reyes"));
        assert!(url.contains("Brake%20inquiry"));
        assert!(url.contains("sam%40example.com"));
        assert!(!url.contains(' '));
    }
}
