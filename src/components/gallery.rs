use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::carousel::{Carousel, CarouselAction, ViewportClass};
use crate::config::{self, GalleryItem};

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub items: Rc<Vec<GalleryItem>>,
}

fn current_viewport() -> ViewportClass {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    ViewportClass::from_width(width)
}

/// Workshop image carousel: auto-advances on a fixed interval, supports
/// manual prev/next, and shows 1/2/4 items depending on viewport width.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let item_count = props.items.len().max(1);
    let carousel =
        use_reducer(|| Carousel::new(item_count, current_viewport().items_per_page()));

    {
        let dispatcher = carousel.dispatcher();
        use_interval(
            move || dispatcher.dispatch(CarouselAction::Advance),
            config::GALLERY_ADVANCE_MS,
        );
    }

    // Reclassify on resize; the index is intentionally left where it is.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let resize_callback = Closure::wrap(Box::new(move || {
                    dispatcher.dispatch(CarouselAction::Reclassify(current_viewport()));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let next = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Advance))
    };
    let prev = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Retreat))
    };

    if props.items.is_empty() {
        return html! {};
    }

    let per_page = carousel.per_page();
    let track_style = format!(
        "transform: translateX(-{}%);",
        carousel.index() as f64 * 100.0 / per_page as f64
    );

    html! {
        <section id="gallery" class="gallery">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Our Workplace"}</h2>
                    <p>{"A look inside the shop, from lift bays to the dyno room"}</p>
                </div>

                <div class="gallery-viewport">
                    <button class="gallery-arrow left" onclick={prev} aria-label="Previous images">
                        {"‹"}
                    </button>

                    <div class="gallery-track" style={track_style}>
                        {
                            props.items.iter().map(|item| html! {
                                <div key={item.image.clone()} class="gallery-item">
                                    <img src={item.image.clone()} alt={item.label.clone()} />
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <button class="gallery-arrow right" onclick={next} aria-label="Next images">
                        {"›"}
                    </button>
                </div>
            </div>
        </section>
    }
}
