/// Easing curves mapping normalized progress `t ∈ [0, 1]` to eased progress.
///
/// Bezier curves follow CSS `cubic-bezier` semantics. Some presets (`overshoot`,
/// `anticipate`, `elastic`) intentionally leave `[0, 1]` mid-curve; all of them start at 0 and
/// end at 1.
///
/// JSON accepts a preset name (`"ease_out"`), a four-number array (`[0.4, 0, 0.2, 1]`) or
/// `{ "cubicBezier": [..] }`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// CSS `ease`.
    Ease,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Shoots past the target and settles back.
    Overshoot,
    /// Pulls back below the start before moving forward.
    Anticipate,
    /// Very fast middle, flat ends.
    SharpSnap,
    /// Long, slow start.
    SlowStart,
    /// Long, slow tail.
    SlowEnd,
    /// Bouncing arrival.
    Bounce,
    /// Elastic arrival.
    Elastic,
    /// Arbitrary CSS-style cubic bezier.
    CubicBezier {
        /// First control point x (clamped to `[0, 1]`).
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x (clamped to `[0, 1]`).
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

const PRESETS: &[(&str, Ease)] = &[
    ("linear", Ease::Linear),
    ("ease", Ease::Ease),
    ("ease_in", Ease::EaseIn),
    ("ease_out", Ease::EaseOut),
    ("ease_in_out", Ease::EaseInOut),
    ("ease_in_quad", Ease::InQuad),
    ("ease_out_quad", Ease::OutQuad),
    ("ease_in_cubic", Ease::InCubic),
    ("ease_out_cubic", Ease::OutCubic),
    ("ease_in_out_cubic", Ease::InOutCubic),
    ("overshoot", Ease::Overshoot),
    ("anticipate", Ease::Anticipate),
    ("sharp_snap", Ease::SharpSnap),
    ("slow_start", Ease::SlowStart),
    ("slow_end", Ease::SlowEnd),
    ("bounce", Ease::Bounce),
    ("elastic", Ease::Elastic),
];

impl Ease {
    /// Look up a named preset.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        PRESETS
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, e)| *e)
    }

    /// Preset name, or `None` for a custom bezier.
    pub fn name(self) -> Option<&'static str> {
        PRESETS.iter().find(|(_, e)| *e == self).map(|(n, _)| *n)
    }

    /// Apply this easing to progress `t` (clamped to `[0, 1]` first).
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier_ease(t, 0.25, 0.1, 0.25, 1.0),
            Self::EaseIn => cubic_bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => cubic_bezier_ease(t, 0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => cubic_bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Overshoot => cubic_bezier_ease(t, 0.34, 1.56, 0.64, 1.0),
            Self::Anticipate => cubic_bezier_ease(t, 0.36, -0.55, 0.63, 1.0),
            Self::SharpSnap => cubic_bezier_ease(t, 0.85, 0.0, 0.15, 1.0),
            Self::SlowStart => cubic_bezier_ease(t, 0.7, 0.0, 0.84, 0.0),
            Self::SlowEnd => cubic_bezier_ease(t, 0.16, 1.0, 0.3, 1.0),
            Self::Bounce => bounce_out(t),
            Self::Elastic => elastic_out(t),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                cubic_bezier_ease(t, x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2)
            }
        }
    }

    /// `true` when the curve leaves `[0, 1]` somewhere in the middle.
    pub fn overshoots(self) -> bool {
        match self {
            Self::Overshoot | Self::Anticipate | Self::Elastic => true,
            Self::CubicBezier { y1, y2, .. } => {
                !(0.0..=1.0).contains(&y1) || !(0.0..=1.0).contains(&y2)
            }
            _ => false,
        }
    }
}

/// Build an easing function from a four-number curve or a preset.
pub fn bezier_easing(curve: Ease) -> impl Fn(f64) -> f64 + Copy {
    move |t| curve.apply(t)
}

impl serde::Serialize for Ease {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match (self.name(), *self) {
            (Some(name), _) => serializer.serialize_str(name),
            (None, Self::CubicBezier { x1, y1, x2, y2 }) => {
                serde::Serialize::serialize(&[x1, y1, x2, y2], serializer)
            }
            (None, _) => serializer.serialize_str("linear"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Ease {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Curve([f64; 4]),
            Obj {
                #[serde(rename = "cubicBezier", alias = "cubic_bezier")]
                cubic_bezier: [f64; 4],
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(name) => Ease::from_name(&name)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown easing \"{name}\""))),
            Repr::Curve(c) | Repr::Obj { cubic_bezier: c } => {
                if c.iter().any(|v| !v.is_finite()) {
                    return Err(serde::de::Error::custom("cubic bezier values must be finite"));
                }
                Ok(Ease::CubicBezier {
                    x1: c[0],
                    y1: c[1],
                    x2: c[2],
                    y2: c[3],
                })
            }
        }
    }
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    fn sample_curve(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * t * a1 + 3.0 * omt * t * t * a2 + t * t * t
    }
    fn sample_curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * a1 + 6.0 * omt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    // Newton-Raphson, then a fixed number of bisection steps.
    let mut t = x;
    for _ in 0..8 {
        let x_t = sample_curve(x1, x2, t) - x;
        if x_t.abs() < 1e-9 {
            return sample_curve(y1, y2, t);
        }
        let d = sample_curve_derivative(x1, x2, t);
        if d.abs() < 1e-7 {
            break;
        }
        t = (t - x_t / d).clamp(0.0, 1.0);
    }

    let mut lo = 0.0;
    let mut hi = 1.0;
    t = x;
    for _ in 0..40 {
        let x_t = sample_curve(x1, x2, t);
        if (x_t - x).abs() < 1e-9 {
            break;
        }
        if x_t < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample_curve(y1, y2, t)
}

fn elastic_out(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let p = 0.3;
    (2f64).powf(-10.0 * t) * ((t - p / 4.0) * (2.0 * std::f64::consts::PI) / p).sin() + 1.0
}

fn bounce_out(t: f64) -> f64 {
    let n1 = 7.5625;
    let d1 = 2.75;

    if t < 1.0 / d1 {
        n1 * t * t
    } else if t < 2.0 / d1 {
        let t = t - 1.5 / d1;
        n1 * t * t + 0.75
    } else if t < 2.5 / d1 {
        let t = t - 2.25 / d1;
        n1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / d1;
        n1 * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
