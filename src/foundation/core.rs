use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Frame rate as a rational number.
///
/// Deserializes from either a plain number (`30`, `29.97`) or `{ "num": 30000, "den": 1001 }`.
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be `> 0`.
    pub den: u32,
}

impl Fps {
    /// Create a validated frame rate.
    pub fn new(num: u32, den: u32) -> MotionResult<Self> {
        if den == 0 {
            return Err(MotionError::schema("$.meta.fps", "fps den must be > 0"));
        }
        if num == 0 {
            return Err(MotionError::schema("$.meta.fps", "fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        if self.den == 0 {
            return 0.0;
        }
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds covered by `frames` frames. Negative frame counts map to negative seconds.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        let fps = self.as_f64();
        if fps <= 0.0 { 0.0 } else { frames / fps }
    }
}

impl<'de> serde::Deserialize<'de> for Fps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(u32),
            Float(f64),
            Obj { num: u32, den: u32 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(num) => Ok(Self { num, den: 1 }),
            Repr::Float(f) => {
                if !f.is_finite() || f <= 0.0 {
                    return Err(serde::de::Error::custom("fps must be a positive number"));
                }
                let scaled = (f * 1000.0).round();
                if scaled > f64::from(u32::MAX) {
                    return Err(serde::de::Error::custom("fps is too large"));
                }
                Ok(Self {
                    num: scaled as u32,
                    den: 1000,
                })
            }
            Repr::Obj { num, den } => Ok(Self { num, den }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output canvas dimensions in pixels.
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Width as `f64`.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Full canvas rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.w(), self.h())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
