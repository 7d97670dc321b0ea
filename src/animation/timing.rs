use crate::{
    animation::{
        ease::Ease,
        spring::{Feel, SpringConfig, spring_progress, spring_settle_frames},
    },
    foundation::{core::Fps, math::clamp01},
};

/// Progress of `frame` through `[start, end]`.
///
/// Clamped to `[0, 1]` unless `extrapolate` is set. A zero-length window is a step: 0 before
/// `start`, 1 from `start` on.
pub fn linear_progress(frame: f64, window: [f64; 2], extrapolate: bool) -> f64 {
    let [start, end] = window;
    let span = end - start;
    if span <= 0.0 {
        return if frame < start { 0.0 } else { 1.0 };
    }
    let t = (frame - start) / span;
    if extrapolate { t } else { clamp01(t) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// How an entrance maps elapsed frames to progress.
pub enum Timing {
    /// Straight linear ramp.
    #[default]
    Linear,
    /// Bezier/closed-form easing over the window.
    Eased(Ease),
    /// Spring physics, stretched so it settles at the end of the window.
    Spring(SpringConfig),
}

impl Timing {
    /// Resolve timing from the optional fields of an animation spec.
    ///
    /// Precedence: explicit spring constants, then a named feel, then an easing curve, then
    /// linear.
    pub fn resolve(
        spring: Option<SpringConfig>,
        feel: Option<Feel>,
        easing: Option<Ease>,
    ) -> Self {
        if let Some(cfg) = spring {
            return Self::Spring(cfg);
        }
        if let Some(feel) = feel {
            return Self::Spring(feel.spring());
        }
        match easing {
            Some(Ease::Linear) | None => Self::Linear,
            Some(e) => Self::Eased(e),
        }
    }

    /// Progress at `frame` frames into a window of `duration` frames.
    ///
    /// Frames before the window give 0 and frames at or after its end give exactly 1. Inside
    /// the window spring and overshooting curves may leave `[0, 1]`.
    pub fn progress(self, frame: f64, duration: f64, fps: Fps) -> f64 {
        if frame.is_nan() || frame <= 0.0 {
            return 0.0;
        }
        if duration <= 0.0 || frame >= duration {
            return 1.0;
        }
        match self {
            Self::Linear => linear_progress(frame, [0.0, duration], false),
            Self::Eased(ease) => ease.apply(frame / duration),
            Self::Spring(cfg) => {
                let settle = spring_settle_frames(fps, cfg);
                spring_progress(frame * settle / duration, fps, cfg)
            }
        }
    }

    /// `true` when progress may transiently leave `[0, 1]`.
    pub fn overshoots(self) -> bool {
        match self {
            Self::Linear => false,
            Self::Eased(ease) => ease.overshoots(),
            Self::Spring(cfg) => cfg.overshoots(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
