use crate::{
    animation::{ease::Ease, timing::linear_progress},
    effects::state::{EvalCtx, VisualState},
    foundation::math::lerp,
    scene::model::{ImageLayer, MotionCurve, PanKeyframe},
};
use std::f64::consts::TAU;

const BREATHE_PERIOD: f64 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Focal pose: `x`/`y` percentages of the image box plus zoom.
pub struct PanPose {
    /// Focal x percentage.
    pub x: f64,
    /// Focal y percentage.
    pub y: f64,
    /// Zoom factor.
    pub scale: f64,
}

/// Translation that keeps the focal point `(focus_x, focus_y)` fixed under `scale`.
///
/// The box scales about its center, so a point `u` from the center moves to `u * scale`;
/// shifting by `-u * (scale - 1)` puts it back.
pub fn focus_translate(
    focus_x: f64,
    focus_y: f64,
    scale: f64,
    box_w: f64,
    box_h: f64,
) -> (f64, f64) {
    (
        (50.0 - focus_x) / 100.0 * box_w * (scale - 1.0),
        (50.0 - focus_y) / 100.0 * box_h * (scale - 1.0),
    )
}

/// Pose inside segment `seg` (between `keys[seg]` and `keys[seg + 1]`) at clip frame `frame`.
///
/// The segment dwells on `keys[seg]` for its `hold` frames, then eases toward the next key.
/// Both boundaries reproduce the keyframe values exactly.
pub fn pan_pose_in_segment(keys: &[PanKeyframe], seg: usize, frame: f64, ease: Ease) -> PanPose {
    let a = keys[seg];
    let b = keys[(seg + 1).min(keys.len() - 1)];
    let move_start = (a.frame + a.hold).min(b.frame);
    let t = ease.apply(linear_progress(frame, [move_start, b.frame], false));
    PanPose {
        x: lerp(a.x, b.x, t),
        y: lerp(a.y, b.y, t),
        scale: lerp(a.scale, b.scale, t),
    }
}

/// Keyframed pan pose at clip frame `frame`. Holds the first/last key outside the range.
pub fn keyframe_pan(keys: &[PanKeyframe], frame: f64, ease: Ease) -> Option<PanPose> {
    let first = keys.first()?;
    let last = keys.last()?;
    let at = |k: &PanKeyframe| PanPose {
        x: k.x,
        y: k.y,
        scale: k.scale,
    };
    if keys.len() == 1 || frame <= first.frame {
        return Some(at(first));
    }
    if frame >= last.frame {
        return Some(at(last));
    }
    // Last segment whose start is at or before `frame`.
    let seg = keys
        .windows(2)
        .rposition(|w| w[0].frame <= frame)
        .unwrap_or(0);
    Some(pan_pose_in_segment(keys, seg, frame, ease))
}

/// Evaluate an image motion curve. Progress runs over the whole clip, not the layer window.
pub fn evaluate_image(layer: &ImageLayer, ctx: &EvalCtx) -> VisualState {
    let t = linear_progress(ctx.clip_frame, [0.0, ctx.clip_duration], false);
    let k = layer.intensity;
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let ease = layer.easing.unwrap_or(Ease::Linear);

    let mut s = VisualState::visible();
    let mut set = |scale: f64, tx: f64, ty: f64| {
        s.scale_x = scale;
        s.scale_y = scale;
        s.translate_x = tx;
        s.translate_y = ty;
    };
    let e = ease.apply(t);
    match layer.motion {
        MotionCurve::Static => {}
        MotionCurve::ZoomIn => set(lerp(1.0, 1.0 + 0.15 * k, e), 0.0, 0.0),
        MotionCurve::ZoomOut => set(lerp(1.0 + 0.15 * k, 1.0, e), 0.0, 0.0),
        MotionCurve::PanLeft | MotionCurve::PanRight => {
            let d = 0.05 * w * k;
            let (from, to) = if layer.motion == MotionCurve::PanLeft {
                (d, -d)
            } else {
                (-d, d)
            };
            set(1.0 + 0.12 * k, lerp(from, to, e), 0.0);
        }
        MotionCurve::PanUp | MotionCurve::PanDown => {
            let d = 0.05 * h * k;
            let (from, to) = if layer.motion == MotionCurve::PanUp {
                (d, -d)
            } else {
                (-d, d)
            };
            set(1.0 + 0.12 * k, 0.0, lerp(from, to, e));
        }
        MotionCurve::KenBurns if !layer.keyframes.is_empty() => {
            if let Some(pose) = keyframe_pan(&layer.keyframes, ctx.clip_frame, ease) {
                let (tx, ty) =
                    focus_translate(pose.x, pose.y, pose.scale, w * layer.scale, h * layer.scale);
                set(pose.scale, tx, ty);
            }
        }
        MotionCurve::KenBurns => set(
            lerp(1.0, 1.0 + 0.12 * k, e),
            lerp(0.0, -0.03 * w * k, e),
            lerp(0.0, -0.02 * h * k, e),
        ),
        MotionCurve::Parallax => {
            let d = 0.02 * w * k;
            set(1.0 + 0.05 * k, lerp(d, -d, e), 0.0);
        }
        MotionCurve::ZoomDrift => set(
            lerp(1.0, 1.0 + 0.03 * k, e),
            lerp(0.0, 0.02 * w * k, e),
            lerp(0.0, -0.01 * h * k, e),
        ),
        MotionCurve::SubtleDrift => set(
            lerp(1.0, 1.0 + 0.02 * k, e),
            lerp(0.0, -0.01 * w * k, e),
            lerp(0.0, 0.01 * h * k, e),
        ),
        MotionCurve::MicroMotion => {
            let f = ctx.clip_frame;
            set(
                lerp(1.0, 1.0 + 0.02 * k, e),
                (TAU * f / 90.0).sin() * 0.8 * k,
                (TAU * f / 110.0).sin() * 0.6 * k,
            );
        }
        MotionCurve::Breathe => set(
            1.0 + 0.02 * k * (TAU * ctx.clip_frame / BREATHE_PERIOD).sin(),
            0.0,
            0.0,
        ),
        MotionCurve::Focus => {
            let fx = layer.focus_x.unwrap_or(50.0);
            let fy = layer.focus_y.unwrap_or(50.0);
            let scale = lerp(
                layer.start_scale.unwrap_or(1.0),
                layer.end_scale.unwrap_or(1.3),
                e,
            );
            let (tx, ty) = focus_translate(fx, fy, scale, w * layer.scale, h * layer.scale);
            set(scale, tx, ty);
        }
    }

    if let Some(n) = layer.fade_in_frames {
        s.opacity = linear_progress(ctx.layer_frame, [0.0, n as f64], false);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/effects/image.rs"]
mod tests;
