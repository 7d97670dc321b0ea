use crate::foundation::core::Fps;

/// Cap on a spring's settle point, in seconds. Only reached by springs with next to no damping.
const SETTLE_HORIZON_SECS: f64 = 60.0;
/// Distance from the target under which a spring counts as settled.
const SETTLE_EPSILON: f64 = 0.005;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Physical constants of a damped spring.
pub struct SpringConfig {
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Stiffness `k`.
    pub stiffness: f64,
    /// Mass `m`; defaults to 1.
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl SpringConfig {
    /// Create a spring config.
    pub const fn new(damping: f64, stiffness: f64, mass: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass,
        }
    }

    /// Damping ratio `ζ = c / (2·sqrt(k·m))`.
    pub fn damping_ratio(self) -> f64 {
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);
        self.damping.max(0.0) / (2.0 * (k * m).sqrt()).max(1e-9)
    }

    /// `true` for under-damped springs, which overshoot their target.
    pub fn overshoots(self) -> bool {
        self.damping_ratio() < 1.0 - 1e-6
    }

    fn is_finite(self) -> bool {
        self.damping.is_finite() && self.stiffness.is_finite() && self.mass.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Named spring presets.
pub enum Feel {
    /// Heavily damped, no overshoot.
    Smooth,
    /// Over-damped and soft.
    Gentle,
    /// Quick with a slight overshoot.
    Snappy,
    /// Visible bounce.
    Bouncy,
    /// Slow, weighty settle.
    Heavy,
    /// Strong ringing.
    Elastic,
}

impl Feel {
    /// Spring constants for this feel.
    pub const fn spring(self) -> SpringConfig {
        match self {
            Self::Smooth => SpringConfig::new(200.0, 100.0, 1.0),
            Self::Gentle => SpringConfig::new(30.0, 60.0, 1.0),
            Self::Snappy => SpringConfig::new(20.0, 200.0, 1.0),
            Self::Bouncy => SpringConfig::new(8.0, 100.0, 1.0),
            Self::Heavy => SpringConfig::new(15.0, 80.0, 2.0),
            Self::Elastic => SpringConfig::new(5.0, 180.0, 1.0),
        }
    }
}

/// Spring progress from 0 toward 1 at `frame`.
///
/// Closed-form step response of a damped oscillator with `x(0) = 0`, `v(0) = 0`. The value
/// depends only on the three inputs, so any frame can be sampled directly. Frames `<= 0` (and
/// NaN) return 0.
pub fn spring_progress(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    if frame.is_nan() || frame <= 0.0 || !config.is_finite() {
        return 0.0;
    }
    spring_step(fps.frames_to_secs(frame), config)
}

/// Number of frames after which the response stays within 0.5% of the target.
///
/// An envelope of the step response bounds the settle time from above; the exact frame is then
/// found by walking back from that bound while frames are still settled. Springs that do not
/// settle within sixty seconds report that horizon.
pub fn spring_settle_frames(fps: Fps, config: SpringConfig) -> f64 {
    let rate = fps.as_f64();
    let horizon = (SETTLE_HORIZON_SECS * rate).ceil().max(1.0);
    let Some(bound) = settle_bound_secs(config) else {
        return horizon;
    };
    let settled = |f: f64| (1.0 - spring_progress(f, fps, config)).abs() <= SETTLE_EPSILON;

    let mut f = (bound * rate).ceil().min(horizon);
    while f > 1.0 && settled(f - 1.0) {
        f -= 1.0;
    }
    f.max(1.0)
}

/// Time after which `|1 - x(t)|` is guaranteed to stay within [`SETTLE_EPSILON`].
fn settle_bound_secs(config: SpringConfig) -> Option<f64> {
    if !config.is_finite() {
        return None;
    }
    let k = config.stiffness.max(0.0);
    let m = config.mass.max(1e-9);
    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return None;
    }
    let zeta = config.damping_ratio();

    let t = if (zeta - 1.0).abs() < 1e-6 {
        // e^-u (1 + u) <= 2 e^-u/2
        2.0 * (2.0 / SETTLE_EPSILON).ln() / w0
    } else if zeta < 1.0 {
        // Oscillation amplitude is e^-ζω₀t / sqrt(1 - ζ²).
        if zeta <= 0.0 {
            return None;
        }
        let amp = 1.0 / (1.0 - zeta * zeta).sqrt();
        (amp / SETTLE_EPSILON).ln() / (zeta * w0)
    } else {
        // The slow exponential dominates the residual.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let slow = w0 * (zeta - z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        (c2 / SETTLE_EPSILON).ln() / slow
    };
    (t.is_finite() && t >= 0.0).then_some(t)
}

fn spring_step(t: f64, config: SpringConfig) -> f64 {
    let k = config.stiffness.max(0.0);
    let c = config.damping.max(0.0);
    let m = config.mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return 0.0;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
