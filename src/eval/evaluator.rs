use crate::{
    animation::{ease::Ease, timing::linear_progress},
    effects::{
        state::{EvalCtx, VisualState},
        try_evaluate_layer,
    },
    foundation::math::lerp,
    scene::model::{ClipSpec, ClipTransition, ClipTransitionKind, LayerSpec, SceneSpec},
};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Everything visible at one scene frame, in paint order.
pub struct FrameOutput {
    /// Scene frame index.
    pub frame: u64,
    /// Visible layers, back to front.
    pub layers: Vec<ComposedLayer>,
    /// Layers left out of this frame.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<EvalDiagnostic>,
}

impl FrameOutput {
    fn empty(frame: u64) -> Self {
        Self {
            frame,
            layers: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// First composed layer with `id`, if visible.
    pub fn layer(&self, id: &str) -> Option<&ComposedLayer> {
        self.layers
            .iter()
            .find(|l| l.layer_id.as_deref() == Some(id))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// A layer state after the clip transition was folded in.
pub struct ComposedLayer {
    /// Layer id, when declared.
    pub layer_id: Option<String>,
    /// Id of the owning clip.
    pub clip_id: String,
    /// Declared `zIndex`; the list is already sorted by it.
    pub stacking_index: i32,
    /// Layer state with the clip pose applied.
    pub state: VisualState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Kind of an [`EvalDiagnostic`].
pub enum EvalDiagnosticKind {
    /// A layer's params could not produce a finite state.
    LayerEvaluationDefect,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// A layer that was dropped from the frame and why.
pub struct EvalDiagnostic {
    /// Diagnostic kind.
    pub kind: EvalDiagnosticKind,
    /// Id of the owning clip.
    pub clip_id: String,
    /// Declaration index of the layer inside its clip.
    pub layer_index: usize,
    /// Layer id, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_id: Option<String>,
    /// Layer type and defect, e.g. `connector layer: non-finite coordinate at from`.
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Whole-clip transform from the enter/exit transitions.
pub struct ClipPose {
    /// Opacity multiplier.
    pub opacity: f64,
    /// Horizontal offset in pixels.
    pub translate_x: f64,
    /// Vertical offset in pixels.
    pub translate_y: f64,
    /// Uniform scale multiplier.
    pub scale: f64,
}

impl ClipPose {
    /// No transition in effect.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    fn then(self, other: Self) -> Self {
        Self {
            opacity: self.opacity * other.opacity,
            translate_x: self.translate_x + other.translate_x,
            translate_y: self.translate_y + other.translate_y,
            scale: self.scale * other.scale,
        }
    }

    /// Fold this clip pose onto a layer state.
    pub fn compose(self, mut state: VisualState) -> VisualState {
        state.opacity *= self.opacity;
        state.translate_x = state.translate_x * self.scale + self.translate_x;
        state.translate_y = state.translate_y * self.scale + self.translate_y;
        state.scale_x *= self.scale;
        state.scale_y *= self.scale;
        state
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Enter,
    Exit,
}

/// Pose for one transition at visibility `v` (0 hidden, 1 at rest).
fn transition_pose(
    t: &ClipTransition,
    edge: Edge,
    v: f64,
    canvas_w: f64,
    canvas_h: f64,
) -> ClipPose {
    // Enter travels toward rest along the named direction, exit continues along it.
    let sign = match edge {
        Edge::Enter => -1.0,
        Edge::Exit => 1.0,
    };
    let away = 1.0 - v;
    let slide = |ux: f64, uy: f64| {
        let dx = t.distance.unwrap_or(canvas_w * 0.1);
        let dy = t.distance.unwrap_or(canvas_h * 0.1);
        ClipPose {
            opacity: v,
            translate_x: sign * ux * away * dx,
            translate_y: sign * uy * away * dy,
            scale: 1.0,
        }
    };
    match t.kind {
        ClipTransitionKind::None => ClipPose::IDENTITY,
        ClipTransitionKind::Fade => ClipPose {
            opacity: v,
            ..ClipPose::IDENTITY
        },
        ClipTransitionKind::SlideUp => slide(0.0, -1.0),
        ClipTransitionKind::SlideDown => slide(0.0, 1.0),
        ClipTransitionKind::SlideLeft => slide(-1.0, 0.0),
        ClipTransitionKind::SlideRight => slide(1.0, 0.0),
        ClipTransitionKind::Zoom => ClipPose {
            opacity: v,
            scale: lerp(0.9, 1.0, v),
            ..ClipPose::IDENTITY
        },
    }
}

/// Combined enter/exit transition pose at clip-local `clip_frame`.
pub fn clip_pose(clip: &ClipSpec, clip_frame: f64, canvas_w: f64, canvas_h: f64) -> ClipPose {
    let duration = clip.duration_frames as f64;
    let mut pose = ClipPose::IDENTITY;
    if let Some(t) = &clip.enter_transition {
        let len = t.duration_frames as f64;
        if clip_frame < len {
            let ease = t.easing.unwrap_or(Ease::EaseOut);
            let v = ease.apply(linear_progress(clip_frame, [0.0, len], false));
            pose = pose.then(transition_pose(t, Edge::Enter, v, canvas_w, canvas_h));
        }
    }
    if let Some(t) = &clip.exit_transition {
        let start = (duration - t.duration_frames as f64).max(0.0);
        if clip_frame >= start {
            let ease = t.easing.unwrap_or(Ease::EaseIn);
            let q = ease.apply(linear_progress(clip_frame, [start, duration], false));
            pose = pose.then(transition_pose(t, Edge::Exit, 1.0 - q, canvas_w, canvas_h));
        }
    }
    pose
}

/// Frame context for `layer` at clip-local `clip_frame`, or `None` when it is not on screen.
///
/// Before its window a layer is absent. After it, the layer is absent unless `persist` is set,
/// in which case it keeps its own clock running and skips its exit ramp.
pub fn layer_ctx(
    layer: &LayerSpec,
    clip: &ClipSpec,
    clip_frame: u64,
    base: &EvalCtx,
) -> Option<EvalCtx> {
    let [start, end] = layer.window(clip.duration_frames);
    if clip_frame < start {
        return None;
    }
    let persisting = clip_frame >= end;
    if persisting && !layer.persist {
        return None;
    }
    Some(EvalCtx {
        layer_frame: (clip_frame - start) as f64,
        layer_duration: end.saturating_sub(start) as f64,
        persisting,
        ..*base
    })
}

/// Resolve the scene at `frame`.
///
/// Frames at or past the scene duration give an empty frame. Layers that cannot be evaluated
/// are left out and reported in `diagnostics`.
#[tracing::instrument(skip(scene), fields(clips = scene.clips.len()))]
pub fn evaluate_frame(scene: &SceneSpec, frame: u64) -> FrameOutput {
    if frame >= scene.meta.duration_frames {
        tracing::debug!(duration = scene.meta.duration_frames, "frame past scene end");
        return FrameOutput::empty(frame);
    }
    let canvas = scene.meta.canvas();
    let fps = scene.meta.fps;

    let mut keyed: Vec<((i32, usize, usize), ComposedLayer)> = Vec::new();
    let mut diagnostics = Vec::new();

    for (clip_index, clip) in scene.clips.iter().enumerate() {
        let [start, end] = clip.window();
        if frame < start || frame >= end {
            continue;
        }
        let clip_frame = frame - start;
        let pose = clip_pose(clip, clip_frame as f64, canvas.w(), canvas.h());
        let base = EvalCtx {
            clip_frame: clip_frame as f64,
            clip_duration: clip.duration_frames as f64,
            ..EvalCtx::new(0.0, 0.0, fps, canvas)
        };

        for (layer_index, layer) in clip.layers.iter().enumerate() {
            let Some(ctx) = layer_ctx(layer, clip, clip_frame, &base) else {
                continue;
            };
            match try_evaluate_layer(layer, &ctx) {
                Ok(state) => keyed.push((
                    (layer.z_index, clip_index, layer_index),
                    ComposedLayer {
                        layer_id: layer.id.clone(),
                        clip_id: clip.id.clone(),
                        stacking_index: layer.z_index,
                        state: pose.compose(state),
                    },
                )),
                Err(defect) => {
                    tracing::warn!(
                        clip = %clip.id,
                        layer_index,
                        layer_type = layer.kind_name(),
                        %defect,
                        "layer evaluation defect"
                    );
                    diagnostics.push(EvalDiagnostic {
                        kind: EvalDiagnosticKind::LayerEvaluationDefect,
                        clip_id: clip.id.clone(),
                        layer_index,
                        layer_id: layer.id.clone(),
                        message: format!("{} layer: {defect}", layer.kind_name()),
                    });
                }
            }
        }
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    FrameOutput {
        frame,
        layers: keyed.into_iter().map(|(_, l)| l).collect(),
        diagnostics,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
