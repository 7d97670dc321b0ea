use std::f64::consts::TAU;

/// Frames per cycle at `speed == 1`.
pub const BASE_PERIOD_FRAMES: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Shape of the idle motion.
pub enum ContinuousKind {
    /// Sine sway along the axis; a figure eight on `both`.
    Oscillate,
    /// Raised-cosine scale swell.
    Pulse,
    /// Slow incommensurate wander.
    Drift,
    /// Gentle scale swell with a matching opacity dip.
    Breathe,
    /// Bob upward and back with a slight sideways sway.
    Float,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Axes a motion is allowed to move on.
pub enum MotionAxis {
    /// Horizontal only.
    X,
    /// Vertical only.
    #[default]
    Y,
    /// Both axes.
    Both,
}

impl MotionAxis {
    fn gates(self) -> (f64, f64) {
        match self {
            Self::X => (1.0, 0.0),
            Self::Y => (0.0, 1.0),
            Self::Both => (1.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Periodic motion layered on top of a finished entrance.
pub struct ContinuousMotion {
    /// Motion shape.
    #[serde(rename = "type")]
    pub kind: ContinuousKind,
    /// Amplitude multiplier.
    #[serde(default = "one")]
    pub intensity: f64,
    /// Cycles per [`BASE_PERIOD_FRAMES`].
    #[serde(default = "one")]
    pub speed: f64,
    /// Allowed axes.
    #[serde(default)]
    pub axis: MotionAxis,
}

fn one() -> f64 {
    1.0
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Offsets produced by [`continuous_motion`]. Translations add, factors multiply.
pub struct MotionOffset {
    /// Horizontal offset in pixels.
    pub dx: f64,
    /// Vertical offset in pixels.
    pub dy: f64,
    /// Scale multiplier.
    pub scale_factor: f64,
    /// Opacity multiplier.
    pub opacity_factor: f64,
}

impl MotionOffset {
    /// No motion.
    pub const IDENTITY: Self = Self {
        dx: 0.0,
        dy: 0.0,
        scale_factor: 1.0,
        opacity_factor: 1.0,
    };
}

impl Default for MotionOffset {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Idle motion `elapsed` frames after the entrance completed.
///
/// Every kind starts from the identity at `elapsed == 0` so the hand-off from the settled
/// entrance pose is seamless. Negative or NaN `elapsed` is the identity.
pub fn continuous_motion(elapsed: f64, spec: &ContinuousMotion) -> MotionOffset {
    if elapsed.is_nan() || elapsed < 0.0 || !spec.intensity.is_finite() || !spec.speed.is_finite()
    {
        return MotionOffset::IDENTITY;
    }
    let phase = TAU * elapsed * spec.speed / BASE_PERIOD_FRAMES;
    // Raised cosine: 0 at phase 0, 1 at half period.
    let swell = 0.5 - 0.5 * phase.cos();
    let k = spec.intensity;
    let (gx, gy) = spec.axis.gates();

    let mut out = MotionOffset::IDENTITY;
    match spec.kind {
        ContinuousKind::Oscillate => {
            let amp = 8.0 * k;
            out.dx = gx * phase.sin() * amp;
            out.dy = if gx > 0.0 && gy > 0.0 {
                (2.0 * phase).sin() * amp * 0.5
            } else {
                gy * phase.sin() * amp
            };
        }
        ContinuousKind::Pulse => {
            out.scale_factor = 1.0 + 0.04 * k * swell;
        }
        ContinuousKind::Drift => {
            let amp = 12.0 * k;
            out.dx = gx * (0.5 * phase).sin() * amp;
            out.dy = gy * (0.37 * phase).sin() * amp * 0.6;
        }
        ContinuousKind::Breathe => {
            out.scale_factor = 1.0 + 0.02 * k * swell;
            out.opacity_factor = (1.0 - 0.08 * k * swell).clamp(0.0, 1.0);
        }
        ContinuousKind::Float => {
            out.dx = gx * phase.sin() * 2.0 * k;
            out.dy = -gy * swell * 6.0 * k;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/continuous.rs"]
mod tests;
