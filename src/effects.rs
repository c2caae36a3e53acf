use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of an element that must be on screen before it counts as
/// entered.
const IN_VIEW_THRESHOLD: f64 = 0.1;

/// Maps a continuous input through a piecewise-linear curve described by
/// `(input, output)` stops, clamping outside the first and last stop.
/// Stops must be sorted by input.
pub fn piecewise(input: f64, stops: &[(f64, f64)]) -> f64 {
    let Some(&(first_in, first_out)) = stops.first() else {
        return 0.0;
    };
    let &(last_in, last_out) = stops.last().unwrap();
    if input <= first_in {
        return first_out;
    }
    if input >= last_in {
        return last_out;
    }
    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if input <= x1 {
            if (x1 - x0).abs() < f64::EPSILON {
                return y1;
            }
            let t = (input - x0) / (x1 - x0);
            return y0 + (y1 - y0) * t;
        }
    }
    last_out
}

/// Progress of an element's travel through the viewport: 0.0 when its top
/// edge is at the bottom of the viewport, 1.0 when its bottom edge reaches
/// the top. Pure function of the bounding rect.
pub fn section_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let total = viewport_height + rect_height;
    if total <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / total).clamp(0.0, 1.0)
}

/// Two-state presentation machine for reveal-on-scroll sections. The
/// states map to CSS classes; the transition curves live entirely in the
/// stylesheet, so no animation runtime is involved.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealPhase {
    Hidden,
    Visible,
}

impl RevealPhase {
    pub fn class(self) -> &'static str {
        match self {
            RevealPhase::Hidden => "reveal",
            RevealPhase::Visible => "reveal visible",
        }
    }
}

/// Watches a node with an `IntersectionObserver` and flips to `Visible`
/// the first time it enters the viewport. One-shot: the observer
/// disconnects itself on the first hit, and is disconnected on unmount in
/// any case.
#[hook]
pub fn use_in_view(node: &NodeRef) -> RevealPhase {
    let phase = use_state(|| RevealPhase::Hidden);

    {
        let phase = phase.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let mut watcher = None;
                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    phase.set(RevealPhase::Visible);
                                    observer.disconnect();
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from_f64(IN_VIEW_THRESHOLD));
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        watcher = Some((observer, callback));
                    }
                }
                move || {
                    if let Some((observer, _callback)) = watcher {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    *phase
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: &[(f64, f64)] = &[(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)];

    #[test]
    fn piecewise_hits_stops_exactly() {
        assert_eq!(piecewise(0.0, FADE), 0.0);
        assert_eq!(piecewise(0.2, FADE), 1.0);
        assert_eq!(piecewise(0.8, FADE), 1.0);
        assert_eq!(piecewise(1.0, FADE), 0.0);
    }

    #[test]
    fn piecewise_interpolates_between_stops() {
        assert!((piecewise(0.1, FADE) - 0.5).abs() < 1e-9);
        assert!((piecewise(0.5, FADE) - 1.0).abs() < 1e-9);
        assert!((piecewise(0.9, FADE) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn piecewise_clamps_outside_range() {
        assert_eq!(piecewise(-2.0, FADE), 0.0);
        assert_eq!(piecewise(3.0, FADE), 0.0);
        let ramp = &[(0.0, 0.8), (1.0, 1.0)];
        assert_eq!(piecewise(-1.0, ramp), 0.8);
        assert_eq!(piecewise(2.0, ramp), 1.0);
    }

    #[test]
    fn piecewise_empty_stops_is_zero() {
        assert_eq!(piecewise(0.5, &[]), 0.0);
    }

    #[test]
    fn section_progress_spans_zero_to_one() {
        // Element top at the bottom edge of an 800px viewport.
        assert_eq!(section_progress(800.0, 600.0, 800.0), 0.0);
        // Element bottom at the top edge.
        assert_eq!(section_progress(-600.0, 600.0, 800.0), 1.0);
        // Halfway through.
        let mid = section_progress(100.0, 600.0, 800.0);
        assert!((mid - 0.5).abs() < 1e-9);
    }

    #[test]
    fn section_progress_clamps_and_survives_degenerate_sizes() {
        assert_eq!(section_progress(5000.0, 600.0, 800.0), 0.0);
        assert_eq!(section_progress(-5000.0, 600.0, 800.0), 1.0);
        assert_eq!(section_progress(100.0, 0.0, 0.0), 0.0);
    }
}
