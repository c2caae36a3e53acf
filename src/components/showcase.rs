use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlElement, HtmlVideoElement};
use yew::prelude::*;

use crate::effects::{piecewise, section_progress};

const VIDEO_SRC: &str =
    "https://videos.pexels.com/video-files/3066446/3066446-uhd_2560_1440_24fps.mp4";
const VIDEO_POSTER: &str = "https://images.pexels.com/photos/3802510/pexels-photo-3802510.jpeg";

// Scroll-fraction curves for the section's travel through the viewport.
const FRAME_OPACITY: &[(f64, f64)] = &[(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)];
const FRAME_SCALE: &[(f64, f64)] = &[(0.0, 0.8), (0.2, 1.0), (0.8, 1.0), (1.0, 0.8)];
const TITLE_OPACITY: &[(f64, f64)] = &[(0.0, 0.0), (0.1, 0.0), (0.3, 1.0)];

/// Full-height section with a looping shop video whose opacity and scale
/// follow the scroll position.
#[function_component(Showcase)]
pub fn showcase() -> Html {
    let section_ref = use_node_ref();
    let frame_ref = use_node_ref();
    let title_ref = use_node_ref();
    let video_ref = use_node_ref();

    // Autoplay is best-effort: hosts may reject it, which is logged and
    // left alone (the poster frame stays up).
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(true);
                    video.set_loop(true);
                    match video.play() {
                        Ok(promise) => {
                            spawn_local(async move {
                                if let Err(err) = JsFuture::from(promise).await {
                                    warn!("video autoplay rejected: {:?}", err);
                                }
                            });
                        }
                        Err(err) => warn!("video play call failed: {:?}", err),
                    }
                }
                || ()
            },
            (),
        );
    }

    {
        let section_ref = section_ref.clone();
        let frame_ref = frame_ref.clone();
        let title_ref = title_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let Some(section) = section_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let viewport_height = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let rect = section.get_bounding_client_rect();
                    let progress = section_progress(rect.top(), rect.height(), viewport_height);

                    if let Some(frame) = frame_ref.cast::<HtmlElement>() {
                        let _ = frame.set_attribute(
                            "style",
                            &format!(
                                "opacity: {:.3}; transform: scale({:.3});",
                                piecewise(progress, FRAME_OPACITY),
                                piecewise(progress, FRAME_SCALE),
                            ),
                        );
                    }
                    if let Some(title) = title_ref.cast::<HtmlElement>() {
                        let _ = title.set_attribute(
                            "style",
                            &format!("opacity: {:.3};", piecewise(progress, TITLE_OPACITY)),
                        );
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial placement before the first scroll event.
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
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

    html! {
        <section ref={section_ref} class="showcase">
            <div class="showcase-shade"></div>
            <div ref={title_ref} class="showcase-title">
                <h2>{"EXPERIENCE THE DIFFERENCE"}</h2>
                <p>{"Precision engineering meets automotive passion"}</p>
            </div>
            <div ref={frame_ref} class="showcase-frame">
                <video
                    ref={video_ref}
                    src={VIDEO_SRC}
                    poster={VIDEO_POSTER}
                    playsinline=true
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No asset directory ships with the build, so the video and poster
    // must resolve without it.
    #[test]
    fn media_sources_are_remote() {
        assert!(VIDEO_SRC.starts_with("https://"));
        assert!(VIDEO_POSTER.starts_with("https://"));
    }
}
