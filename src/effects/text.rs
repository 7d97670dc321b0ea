use crate::{
    effects::{
        countup::countup,
        kinetic::{glitch, scramble, stagger, wave},
        pose::{
            DEFAULT_DISTANCE, Direction, EntranceStyle, apply_continuous, apply_exit,
            enter_progress, entrance_pose,
        },
        state::{ClipRegion, EvalCtx, Extras, LayerDefect, VisualState},
    },
    foundation::math::clamp01,
    scene::model::{
        AnimationTiming, HighlightParams, RevealDirection, RevealParams, TextEnter, TextLayer,
        TypewriterParams,
    },
};

/// Evaluate a text layer: entrance, then idle motion once settled, then exit.
pub fn evaluate_text(layer: &TextLayer, ctx: &EvalCtx) -> Result<VisualState, LayerDefect> {
    let anim = &layer.animation.timing;
    let enter_frames = anim.enter_duration_frames as f64;
    let (mut state, settled_at) = match &layer.animation.enter {
        TextEnter::Fade => base(EntranceStyle::Fade, anim, ctx),
        TextEnter::Scale => base(EntranceStyle::Scale, anim, ctx),
        TextEnter::Pop => base(EntranceStyle::Pop, anim, ctx),
        TextEnter::SlideUp => base(EntranceStyle::Slide(Direction::Up), anim, ctx),
        TextEnter::SlideDown => base(EntranceStyle::Slide(Direction::Down), anim, ctx),
        TextEnter::SlideLeft => base(EntranceStyle::Slide(Direction::Left), anim, ctx),
        TextEnter::SlideRight => base(EntranceStyle::Slide(Direction::Right), anim, ctx),
        TextEnter::None => (VisualState::visible(), 0.0),
        TextEnter::Typewriter(p) => typewriter(&layer.text, p, ctx)?,
        TextEnter::Reveal(p) => (reveal(p, anim, ctx), enter_frames),
        TextEnter::Highlight(p) => (highlight(p, anim, ctx), enter_frames),
        TextEnter::Countup(p) => (countup(p, anim, ctx), enter_frames),
        TextEnter::Stagger(p) => stagger(&layer.text, p, anim, ctx),
        TextEnter::Wave(p) => (wave(&layer.text, p, anim, ctx), enter_frames),
        TextEnter::Scramble(p) => (scramble(&layer.text, p, anim, ctx), enter_frames),
        TextEnter::Glitch(p) => glitch(p, anim, ctx),
    };
    apply_continuous(&mut state, anim, ctx, settled_at);
    apply_exit(&mut state, anim, ctx);
    Ok(state)
}

fn base(style: EntranceStyle, anim: &AnimationTiming, ctx: &EvalCtx) -> (VisualState, f64) {
    let p = enter_progress(anim, ctx);
    let distance = anim.distance.unwrap_or(DEFAULT_DISTANCE);
    (
        entrance_pose(style, p, distance),
        anim.enter_duration_frames as f64,
    )
}

/// Visible character count for a typewriter at `frame` frames after its start delay.
pub fn typewriter_visible_chars(len: usize, frame: f64, p: &TypewriterParams) -> usize {
    let eff = frame - p.start_delay;
    if eff.is_nan() || eff < 0.0 {
        return 0;
    }
    let typed = ((eff / p.speed).floor() as usize).min(len);
    let Some(del) = p.delete_after else {
        return typed;
    };
    let hold_end = len as f64 * p.speed + del.hold_frames;
    if eff < hold_end {
        return typed;
    }
    let speed = del.speed.unwrap_or(p.speed);
    let removed = ((eff - hold_end) / speed).floor() as usize;
    len.saturating_sub(removed)
}

fn typewriter(
    text: &str,
    p: &TypewriterParams,
    ctx: &EvalCtx,
) -> Result<(VisualState, f64), LayerDefect> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Err(LayerDefect::EmptyText("typewriter"));
    }
    let visible = typewriter_visible_chars(chars.len(), ctx.layer_frame, p);
    let cursor_visible =
        p.cursor && ctx.layer_frame.rem_euclid(p.blink_period) < p.blink_period / 2.0;
    let settled_at = p.start_delay + chars.len() as f64 * p.speed;
    let state = VisualState::visible().with_extras(Extras::Typewriter {
        visible_text: chars[..visible].iter().collect(),
        visible_chars: visible,
        cursor_visible,
    });
    Ok((state, settled_at))
}

fn reveal(p: &RevealParams, anim: &AnimationTiming, ctx: &EvalCtx) -> VisualState {
    let t = clamp01(enter_progress(anim, ctx));
    let hidden = (1.0 - t) * 100.0;
    let mut clip = ClipRegion::default();
    // The wipe travels in `direction`, so the hidden part sits on the far side.
    match p.direction {
        RevealDirection::Left => clip.left = hidden,
        RevealDirection::Right => clip.right = hidden,
        RevealDirection::Up => clip.top = hidden,
        RevealDirection::Down => clip.bottom = hidden,
    }
    let mut state = VisualState::visible();
    state.clip_region = Some(clip);
    state.blur = p.blur.map(|b| b * (1.0 - t));
    state
}

fn highlight(p: &HighlightParams, anim: &AnimationTiming, ctx: &EvalCtx) -> VisualState {
    let t = clamp01(enter_progress(anim, ctx));
    VisualState::visible().with_extras(Extras::Highlight {
        progress: t,
        padding: p.padding,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/text.rs"]
mod tests;
