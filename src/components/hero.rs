use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::carousel::{Carousel, CarouselAction};
use crate::config::{self, HeroSlide};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub slides: Rc<Vec<HeroSlide>>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let slide_count = props.slides.len().max(1);
    let carousel = use_reducer(|| Carousel::new(slide_count, 1));

    {
        let dispatcher = carousel.dispatcher();
        use_interval(
            move || dispatcher.dispatch(CarouselAction::Advance),
            config::HERO_ADVANCE_MS,
        );
    }

    let next_slide = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Advance))
    };
    let prev_slide = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Retreat))
    };

    if props.slides.is_empty() {
        return html! {};
    }

    let current = carousel.index();
    let slide = &props.slides[current];

    html! {
        <section id="home" class="hero">
            <div class="hero-backdrop">
                {
                    props.slides.iter().enumerate().map(|(i, s)| {
                        let class = classes!("hero-slide", (i == current).then_some("active"));
                        let style = format!("background-image: url({});", s.image);
                        html! { <div key={i} {class} {style}></div> }
                    }).collect::<Html>()
                }
                <div class="hero-shade"></div>
            </div>

            <div class="hero-content">
                // Keyed on the index so the entry animation replays per slide.
                <div key={current} class="hero-headline">
                    <h1>
                        { &slide.title }
                        <span class="hero-subtitle">{ &slide.subtitle }</span>
                    </h1>
                </div>
                <p class="hero-blurb">{ config::SHOP_BLURB }</p>
                <div class="hero-cta-group">
                    <a href="#services" class="hero-cta accent">{"EXPLORE SERVICES"}</a>
                    <a href="#contact" class="hero-cta plain">{"CONTACT US"}</a>
                </div>
            </div>

            <div class="hero-controls">
                <button class="hero-arrow" onclick={prev_slide} aria-label="Previous slide">
                    {"‹"}
                </button>
                <button class="hero-arrow" onclick={next_slide} aria-label="Next slide">
                    {"›"}
                </button>
            </div>

            <div class="hero-dots">
                {
                    (0..props.slides.len()).map(|i| {
                        let dispatcher = carousel.dispatcher();
                        let class = classes!("hero-dot", (i == current).then_some("active"));
                        html! {
                            <button
                                key={i}
                                {class}
                                aria-label={format!("Go to slide {}", i + 1)}
                                onclick={Callback::from(move |_| {
                                    dispatcher.dispatch(CarouselAction::JumpTo(i))
                                })}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="hero-scroll-hint">
                <span class="chevron-down"></span>
            </div>
        </section>
    }
}
