use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;

/// Cosmetic progress: fixed step per tick, capped at 100. Not tied to any
/// real loading signal; the app root decides when to unmount the loader.
pub fn next_progress(current: u32) -> u32 {
    (current + config::LOADER_STEP).min(100)
}

#[function_component(Loader)]
pub fn loader() -> Html {
    let progress = use_state(|| 0u32);

    // Pause the interval once the bar is full; the hook clears it on
    // unmount either way.
    let millis = if *progress >= 100 {
        0
    } else {
        config::LOADER_TICK_MS
    };
    use_interval(
        {
            let progress = progress.clone();
            move || progress.set(next_progress(*progress))
        },
        millis,
    );

    let bar_style = format!("width: {}%;", *progress);

    html! {
        <div class="loader-screen">
            <div class="loader-inner">
                <span class="loader-wordmark">{ config::SHOP_NAME }</span>
                <div class="loader-track">
                    <div class="loader-bar" style={bar_style}></div>
                </div>
                <p class="loader-percent">{ format!("{}%", *progress) }</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_climbs_in_fixed_steps() {
        let mut progress = 0;
        let mut ticks = 0;
        while progress < 100 {
            let next = next_progress(progress);
            assert_eq!(next, progress + config::LOADER_STEP);
            progress = next;
            ticks += 1;
        }
        assert_eq!(progress, 100);
        assert_eq!(ticks, 100 / config::LOADER_STEP);
    }

    #[test]
    fn progress_never_exceeds_hundred() {
        assert_eq!(next_progress(100), 100);
        assert_eq!(next_progress(98), 100);
    }
}
