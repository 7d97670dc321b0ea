use crate::{
    animation::{
        continuous::continuous_motion,
        ease::Ease,
        timing::{Timing, linear_progress},
    },
    effects::state::{EvalCtx, VisualState},
    foundation::math::clamp01,
    scene::model::{AnimationTiming, ExitKind},
};

/// Default slide distance in pixels.
pub const DEFAULT_DISTANCE: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Direction of travel for slides.
pub enum Direction {
    /// Toward the top of the canvas.
    Up,
    /// Toward the bottom of the canvas.
    Down,
    /// Toward the left edge.
    Left,
    /// Toward the right edge.
    Right,
}

impl Direction {
    /// Unit vector of travel in canvas space (y grows downward).
    fn unit(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Shared entrance shapes for text and buttons.
pub enum EntranceStyle {
    /// Opacity ramp.
    Fade,
    /// Opacity plus scale up from 0.8.
    Scale,
    /// Opacity plus scale up from 0.5; overshooting progress pops past full size.
    Pop,
    /// Opacity plus travel along the direction into the resting spot.
    Slide(Direction),
    /// Visible at rest immediately.
    None,
}

/// Entrance pose at progress `p`.
///
/// `p` may leave `[0, 1]` under spring timing; opacity clamps but scale and offset follow it.
pub fn entrance_pose(style: EntranceStyle, p: f64, distance: f64) -> VisualState {
    let mut s = VisualState::visible();
    if style == EntranceStyle::None {
        return s;
    }
    s.opacity = clamp01(p);
    match style {
        EntranceStyle::Scale => s.scale_by(0.8 + 0.2 * p),
        EntranceStyle::Pop => s.scale_by(0.5 + 0.5 * p),
        EntranceStyle::Slide(dir) => {
            // Travels toward rest along `dir`, so it starts displaced the opposite way.
            let (ux, uy) = dir.unit();
            let remaining = (1.0 - p) * distance;
            s.translate_x = -ux * remaining;
            s.translate_y = -uy * remaining;
        }
        EntranceStyle::Fade | EntranceStyle::None => {}
    }
    s
}

/// Entrance progress for a layer using `anim`.
pub fn enter_progress(anim: &AnimationTiming, ctx: &EvalCtx) -> f64 {
    anim.timing()
        .progress(ctx.layer_frame, anim.enter_duration_frames as f64, ctx.fps)
}

/// Apply idle motion once the entrance completed at layer frame `settled_at`.
pub fn apply_continuous(
    state: &mut VisualState,
    anim: &AnimationTiming,
    ctx: &EvalCtx,
    settled_at: f64,
) {
    if let Some(spec) = &anim.continuous
        && ctx.layer_frame >= settled_at
    {
        state.apply_motion(continuous_motion(ctx.layer_frame - settled_at, spec));
    }
}

/// Exit ramp over the last `exitDurationFrames` of the layer window.
pub fn apply_exit(state: &mut VisualState, anim: &AnimationTiming, ctx: &EvalCtx) {
    let Some(kind) = anim.exit else {
        return;
    };
    if kind == ExitKind::None || ctx.persisting || anim.exit_duration_frames == 0 {
        return;
    }
    let end = ctx.layer_duration;
    let start = (end - anim.exit_duration_frames as f64).max(0.0);
    if ctx.layer_frame < start {
        return;
    }
    let linear = linear_progress(ctx.layer_frame, [start, end], false);
    let q = match anim.timing() {
        Timing::Linear => linear,
        Timing::Eased(ease) => ease.apply(linear),
        // Springs have no natural reverse; accelerate out instead.
        Timing::Spring(_) => Ease::EaseIn.apply(linear),
    };
    let q = clamp01(q);

    state.opacity *= 1.0 - q;
    let distance = anim.distance.unwrap_or(DEFAULT_DISTANCE);
    let dir = match kind {
        ExitKind::Scale => {
            state.scale_by(1.0 - 0.2 * q);
            None
        }
        ExitKind::SlideUp => Some(Direction::Up),
        ExitKind::SlideDown => Some(Direction::Down),
        ExitKind::SlideLeft => Some(Direction::Left),
        ExitKind::SlideRight => Some(Direction::Right),
        ExitKind::Fade | ExitKind::None => None,
    };
    if let Some(dir) = dir {
        let (ux, uy) = dir.unit();
        state.translate_x += ux * q * distance;
        state.translate_y += uy * q * distance;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pose.rs"]
mod tests;
