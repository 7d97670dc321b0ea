use crate::{
    effects::state::{EvalCtx, Extras, VisualState},
    scene::model::{BackgroundLayer, BackgroundVariant},
};
use std::f64::consts::TAU;

/// Loop length in frames and drift amplitude in pixels per variant.
fn cycle(variant: BackgroundVariant) -> (f64, f64) {
    match variant {
        BackgroundVariant::Color => (0.0, 0.0),
        BackgroundVariant::Gradient => (240.0, 0.0),
        BackgroundVariant::Orbs => (180.0, 60.0),
        BackgroundVariant::Grid => (120.0, 40.0),
        BackgroundVariant::Noise => (90.0, 0.0),
        BackgroundVariant::Radial => (200.0, 20.0),
        BackgroundVariant::Mesh => (300.0, 30.0),
        BackgroundVariant::Aurora => (360.0, 80.0),
        BackgroundVariant::Particles => (150.0, 25.0),
    }
}

/// Backgrounds are always fully visible; animated variants expose a looping phase.
pub fn evaluate_background(layer: &BackgroundLayer, ctx: &EvalCtx) -> VisualState {
    let (period, amp) = cycle(layer.variant);
    let phase = if period > 0.0 {
        (ctx.clip_frame * layer.speed / period).rem_euclid(1.0)
    } else {
        0.0
    };
    let angle = TAU * phase;
    let (drift_x, drift_y) = match layer.variant {
        // Grid scrolls diagonally and wraps at one cell.
        BackgroundVariant::Grid => (phase * amp, phase * amp),
        _ => (angle.sin() * amp, (angle * 2.0).sin() * amp * 0.5),
    };
    VisualState::visible().with_extras(Extras::Background {
        variant: layer.variant,
        phase,
        drift_x,
        drift_y,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/background.rs"]
mod tests;
