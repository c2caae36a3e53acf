use std::rc::Rc;

use yew::prelude::*;

use crate::config::{GalleryItem, PartnerLogo};
use crate::effects::use_in_view;

#[derive(Properties, PartialEq)]
pub struct PartnersProps {
    pub logos: Rc<Vec<PartnerLogo>>,
    pub photos: Rc<Vec<GalleryItem>>,
}

/// Partner logo marquee plus a row of reveal-on-scroll workshop photos.
/// The logo row is duplicated so the CSS marquee wraps without a seam.
#[function_component(Partners)]
pub fn partners(props: &PartnersProps) -> Html {
    let section_ref = use_node_ref();
    let phase = use_in_view(&section_ref);

    let logo_row = |pass: usize| -> Html {
        props
            .logos
            .iter()
            .enumerate()
            .map(|(i, logo)| {
                html! {
                    <div key={format!("{}-{}", pass, i)} class="marquee-item">
                        <img src={logo.image.clone()} alt={logo.name.clone()} />
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <section id="partners" class="partners">
            <div class="container" ref={section_ref}>
                <div class={classes!("section-heading", phase.class())}>
                    <h2>{"Our Partners"}</h2>
                    <p>{"We work with the best brands in the automotive industry"}</p>
                </div>

                <div class="marquee-viewport">
                    <div class="marquee-track">
                        { logo_row(0) }
                        { logo_row(1) }
                        { logo_row(2) }
                    </div>
                </div>

                <div class="partner-photos">
                    {
                        props.photos.iter().enumerate().map(|(i, photo)| {
                            let style = format!("transition-delay: {}ms;", 100 + i * 100);
                            html! {
                                <div
                                    key={photo.image.clone()}
                                    class={classes!("partner-photo", phase.class())}
                                    {style}
                                >
                                    <img src={photo.image.clone()} alt={photo.label.clone()} />
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
