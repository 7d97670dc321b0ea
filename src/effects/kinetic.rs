//! Per-item and hash-driven text effects.

use crate::{
    animation::{
        continuous::MotionAxis,
        stagger::{max_stagger_delay, resolve_stagger_delay},
        timing::linear_progress,
    },
    effects::{
        pose::{DEFAULT_DISTANCE, enter_progress},
        state::{EvalCtx, Extras, ItemState, VisualState},
    },
    foundation::math::{clamp01, hash_signed, hash_unit, hash64},
    scene::model::{
        AnimationTiming, GlitchParams, ScrambleParams, SplitBy, StaggerMode, StaggerParams,
        WaveParams,
    },
};

const SALT_JITTER_X: u64 = 0x4A58;
const SALT_JITTER_Y: u64 = 0x4A59;
const SALT_SKEW: u64 = 0x534B;
const SALT_FLICKER: u64 = 0x464C;
const SALT_SCRAMBLE: u64 = 0x5343;

/// Split `text` into stagger items.
pub fn split_items(text: &str, split: SplitBy) -> Vec<String> {
    match split {
        SplitBy::Char => text.chars().map(String::from).collect(),
        SplitBy::Word => text.split_whitespace().map(str::to_owned).collect(),
        SplitBy::Line => text.lines().map(str::to_owned).collect(),
    }
}

fn item_pose(
    mode: StaggerMode,
    index: usize,
    text: String,
    p: f64,
    started: bool,
    distance: f64,
) -> ItemState {
    let shown = if started { 1.0 } else { 0.0 };
    let (opacity, translate_y, scale) = match mode {
        StaggerMode::Slide => (shown, (1.0 - p) * distance, 1.0),
        StaggerMode::Fade => (clamp01(p), 0.0, 1.0),
        StaggerMode::Scale => (shown, 0.0, p.max(0.0)),
        StaggerMode::Combined => (clamp01(p), (1.0 - p) * distance, 0.8 + 0.2 * p),
    };
    ItemState {
        index,
        text,
        opacity,
        translate_x: 0.0,
        translate_y,
        scale,
    }
}

/// Cascading per-item entrance. Returns the state and the frame the last item settles.
pub(crate) fn stagger(
    text: &str,
    p: &StaggerParams,
    anim: &AnimationTiming,
    ctx: &EvalCtx,
) -> (VisualState, f64) {
    let timing = anim.timing();
    let settle = p.settle_frames.unwrap_or(anim.enter_duration_frames as f64);
    let distance = anim.distance.unwrap_or(DEFAULT_DISTANCE * 0.5);
    let parts = split_items(text, p.split);
    let count = parts.len();

    let items = parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            let local = ctx.layer_frame - resolve_stagger_delay(i, &p.delay, p.variance);
            let progress = timing.progress(local, settle, ctx.fps);
            item_pose(p.mode, i, part, progress, local >= 0.0, distance)
        })
        .collect();

    let settled_at = max_stagger_delay(count, &p.delay, p.variance) + settle;
    (
        VisualState::visible().with_extras(Extras::Items { items }),
        settled_at,
    )
}

/// Per-character sine wave. Characters fade in over the enter window.
pub(crate) fn wave(
    text: &str,
    p: &WaveParams,
    anim: &AnimationTiming,
    ctx: &EvalCtx,
) -> VisualState {
    let fade = clamp01(enter_progress(anim, ctx));
    let elapsed = ctx.layer_frame.max(0.0);
    let items = text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let phase = (elapsed + i as f64 * p.spread) * p.frequency;
            let (tx, ty) = match p.axis {
                MotionAxis::X => (phase.cos() * p.amplitude, 0.0),
                MotionAxis::Y => (0.0, phase.sin() * p.amplitude),
                MotionAxis::Both => (phase.cos() * p.amplitude, phase.sin() * p.amplitude),
            };
            let scale = 1.0 + p.scale_variation.unwrap_or(0.0) * phase.sin();
            ItemState {
                index: i,
                text: ch.to_string(),
                opacity: fade,
                translate_x: tx,
                translate_y: ty,
                scale,
            }
        })
        .collect();
    VisualState::visible().with_extras(Extras::Items { items })
}

/// Character shown in unrevealed slot `index` at `frame`.
pub fn scramble_char(charset: &[char], frame: i64, index: usize) -> char {
    if charset.is_empty() {
        return ' ';
    }
    let h = hash64(frame, SALT_SCRAMBLE ^ (index as u64).wrapping_mul(0x9E37_79B9));
    charset[(h % charset.len() as u64) as usize]
}

pub(crate) fn scramble(
    text: &str,
    p: &ScrambleParams,
    anim: &AnimationTiming,
    ctx: &EvalCtx,
) -> VisualState {
    let chars: Vec<char> = text.chars().collect();
    let charset: Vec<char> = p.charset.chars().collect();
    let t = clamp01(enter_progress(anim, ctx));
    let revealed = ((t * chars.len() as f64).floor() as usize).min(chars.len());
    let frame = ctx.layer_frame.floor() as i64;
    let shown: String = chars
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            if i < revealed || ch.is_whitespace() {
                ch
            } else {
                scramble_char(&charset, frame, i)
            }
        })
        .collect();
    VisualState::visible().with_extras(Extras::Scramble {
        text: shown,
        revealed,
    })
}

/// Hash-driven glitch entrance. Returns the state and the frame it settles.
pub(crate) fn glitch(
    p: &GlitchParams,
    anim: &AnimationTiming,
    ctx: &EvalCtx,
) -> (VisualState, f64) {
    let duration = p.duration_frames.unwrap_or(anim.enter_duration_frames as f64);
    let end = p.start_frame + duration;
    if ctx.layer_frame < p.start_frame {
        return (VisualState::hidden(), end);
    }
    if ctx.layer_frame >= end {
        return (VisualState::visible(), end);
    }

    let progress = linear_progress(ctx.layer_frame, [p.start_frame, end], false);
    let k = p.intensity * (1.0 - progress * 0.8);
    let f = ctx.layer_frame.floor() as i64;

    let mut s = VisualState::visible();
    s.translate_x = hash_signed(f, SALT_JITTER_X) * 12.0 * k;
    s.translate_y = hash_signed(f, SALT_JITTER_Y) * 4.0 * k;
    s.skew = Some(hash_signed(f, SALT_SKEW) * 8.0 * k);
    if hash_unit(f, SALT_FLICKER) < 0.15 * k.min(1.0) {
        s.opacity = 0.6;
    }
    let extras = Extras::Glitch {
        ghost_offset_x: 6.0 * k - s.translate_x * 0.5,
        ghost_offset_y: 0.0,
        ghost_opacity: (1.0 - progress) * 0.6 * k.min(1.0),
    };
    (s.with_extras(extras), end)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/kinetic.rs"]
mod tests;
