use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::services::transitions::{step_progress, FadeScale};

/// Roughly one animation frame at 60Hz
const FRAME_MS: u32 = 16;

/// Inline fade/scale style that animates toward shown (`visible`) or hidden.
///
/// Starts hidden, so the first render after opening plays the enter
/// animation. Reversing mid-animation continues from the current frame.
#[hook]
pub fn use_fade_scale(visible: bool, duration_ms: u32) -> String {
    let progress = use_state_eq(|| 0.0_f64);
    let current = use_mut_ref(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with((visible, duration_ms), move |&(visible, duration_ms)| {
            let target = if visible { 1.0 } else { 0.0 };
            let settled = *current.borrow() == target;
            let ticker = (!settled).then(|| {
                Interval::new(FRAME_MS, move || {
                    let now = *current.borrow();
                    if now == target {
                        return;
                    }
                    let next = step_progress(now, target, FRAME_MS, duration_ms);
                    *current.borrow_mut() = next;
                    progress.set(next);
                })
            });
            move || drop(ticker)
        });
    }

    FadeScale::new(duration_ms).frame(*progress)
}
