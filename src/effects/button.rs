use crate::{
    animation::{ease::Ease, timing::linear_progress},
    effects::{
        pose::{
            DEFAULT_DISTANCE, Direction, EntranceStyle, apply_continuous, apply_exit,
            enter_progress, entrance_pose,
        },
        state::{EvalCtx, VisualState},
    },
    foundation::math::lerp,
    scene::model::{ButtonLayer, ButtonStyle, HoverSpec, PulseSpec},
};
use std::f64::consts::TAU;

/// Idle pulse factor `frame` frames after the entrance settled. Starts and ends each period at 1.
pub fn pulse_factor(pulse: &PulseSpec, frame: f64) -> f64 {
    if frame < 0.0 {
        return 1.0;
    }
    let swell = 0.5 - 0.5 * (TAU * frame / pulse.period_frames).cos();
    1.0 + pulse.intensity * swell
}

/// Hover scale factor and upward nudge at layer frame `frame`.
pub fn hover_pose(hover: &HoverSpec, frame: f64) -> (f64, f64) {
    let end = hover.at_frame + hover.duration_frames;
    let h = Ease::EaseOut.apply(linear_progress(frame, [hover.at_frame, end], false));
    (lerp(1.0, hover.scale, h), -hover.nudge * h)
}

/// Button entrance; once settled, pulse and hover multiply onto the settled pose.
pub fn evaluate_button(layer: &ButtonLayer, ctx: &EvalCtx) -> VisualState {
    let anim = &layer.animation;
    let timing = &anim.timing;
    let style = match anim.style {
        ButtonStyle::Fade => EntranceStyle::Fade,
        ButtonStyle::Scale => EntranceStyle::Scale,
        ButtonStyle::Pop => EntranceStyle::Pop,
        ButtonStyle::Slide => EntranceStyle::Slide(Direction::Up),
    };
    let p = enter_progress(timing, ctx);
    let settled_at = timing.enter_duration_frames as f64;
    let mut state = entrance_pose(style, p, timing.distance.unwrap_or(DEFAULT_DISTANCE));

    if ctx.layer_frame >= settled_at {
        if let Some(pulse) = &anim.pulse {
            state.scale_by(pulse_factor(pulse, ctx.layer_frame - settled_at));
        }
        if let Some(hover) = &anim.hover {
            let (k, dy) = hover_pose(hover, ctx.layer_frame);
            state.scale_by(k);
            state.translate_y += dy;
        }
    }
    apply_continuous(&mut state, timing, ctx, settled_at);
    apply_exit(&mut state, timing, ctx);
    state
}

#[cfg(test)]
#[path = "../../tests/unit/effects/button.rs"]
mod tests;
