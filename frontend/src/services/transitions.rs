//! Fade + scale enter/exit animation used by the modal host.
//!
//! Styles are produced per frame from a linear progress value in `[0, 1]`,
//! `1` being fully shown. The exit animation runs the same frames backwards.

const BACK_OVERSHOOT: f64 = 1.70158;

/// Eases out with a small overshoot past the end value before settling
pub fn back_out(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * ((BACK_OVERSHOOT + 1.0) * t + BACK_OVERSHOOT) + 1.0
}

/// Move `progress` toward `target` by the share of `duration_ms` that `elapsed_ms` covers
pub fn step_progress(progress: f64, target: f64, elapsed_ms: u32, duration_ms: u32) -> f64 {
    if duration_ms == 0 {
        return target;
    }

    let step = f64::from(elapsed_ms) / f64::from(duration_ms);
    if progress < target {
        (progress + step).min(target)
    } else {
        (progress - step).max(target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeScale {
    pub duration_ms: u32,
    pub init_opacity: f64,
    pub init_scale: f64,
}

impl FadeScale {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            init_opacity: 1.0,
            init_scale: 1.0,
        }
    }

    /// Inline style for an already eased `t`
    pub fn css(&self, t: f64) -> String {
        format!(
            "opacity: {}; scale: {};",
            self.init_opacity * t,
            self.init_scale * t
        )
    }

    /// Inline style at linear progress `progress`, eased with `back_out`
    pub fn frame(&self, progress: f64) -> String {
        self.css(back_out(progress.clamp(0.0, 1.0)))
    }
}
