use crate::foundation::math::hash_signed;

const VARIANCE_SALT: u64 = 0x5747_4752;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Per-item delay spec: one uniform step or an irregular cycle of steps.
pub enum StaggerSpec {
    /// Every item starts `n` frames after the previous one.
    Uniform(f64),
    /// Steps cycled in order: `[3, 5]` starts items at `0, 3, 8, 11, 16, …`.
    Irregular(Vec<f64>),
}

impl Default for StaggerSpec {
    fn default() -> Self {
        Self::Uniform(3.0)
    }
}

/// Start delay in frames for the item at `index`.
///
/// Irregular steps are cycled: whole cycles contribute their sum, then the
/// leading steps of the partial cycle are added. `variance_frames` adds a jitter in
/// `[-variance, variance)` that depends only on `index`; the result never goes below zero.
pub fn resolve_stagger_delay(
    index: usize,
    spec: &StaggerSpec,
    variance_frames: Option<f64>,
) -> f64 {
    let base = match spec {
        StaggerSpec::Uniform(step) => index as f64 * step,
        StaggerSpec::Irregular(steps) => {
            if steps.is_empty() {
                0.0
            } else {
                let cycle: f64 = steps.iter().sum();
                let whole = index / steps.len();
                let rem = index % steps.len();
                whole as f64 * cycle + steps[..rem].iter().sum::<f64>()
            }
        }
    };
    let jitter = match variance_frames {
        Some(v) if v > 0.0 && v.is_finite() => hash_signed(index as i64, VARIANCE_SALT) * v,
        _ => 0.0,
    };
    (base + jitter).max(0.0)
}

/// Largest delay among `count` items.
pub fn max_stagger_delay(count: usize, spec: &StaggerSpec, variance_frames: Option<f64>) -> f64 {
    (0..count)
        .map(|i| resolve_stagger_delay(i, spec, variance_frames))
        .fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
