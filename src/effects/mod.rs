//! Per-layer evaluators.
//!
//! Each evaluator is a pure function of the layer params and an [`state::EvalCtx`]. None of
//! them read earlier frames, so any frame can be evaluated on its own.

/// Looping background phase and drift.
pub mod background;
/// Button entrance, idle pulse and hover.
pub mod button;
/// Connector path length, dashes and draw-in.
pub mod connector;
/// Count-up number formatting.
pub mod countup;
/// Image motion curves and keyframe pans.
pub mod image;
/// Per-item and hash-driven text entrances.
pub mod kinetic;
/// Entrance, idle and exit poses shared by text and buttons.
pub mod pose;
/// Evaluator outputs and frame context.
pub mod state;
/// Text layer dispatch.
pub mod text;

use crate::scene::model::{LayerKind, LayerSpec};
use state::{EvalCtx, LayerDefect, VisualState};

/// Evaluate one layer, reporting why it could not be drawn.
pub fn try_evaluate_layer(layer: &LayerSpec, ctx: &EvalCtx) -> Result<VisualState, LayerDefect> {
    let state = match &layer.kind {
        LayerKind::Background(bg) => background::evaluate_background(bg, ctx),
        LayerKind::Image(img) | LayerKind::GeneratedImage(img) => image::evaluate_image(img, ctx),
        LayerKind::Text(text) => text::evaluate_text(text, ctx)?,
        LayerKind::Connector(conn) => connector::evaluate_connector(conn, ctx)?,
        LayerKind::Button(button) => button::evaluate_button(button, ctx),
    };
    if !state.is_finite() {
        return Err(LayerDefect::NonFiniteState);
    }
    Ok(state)
}

/// Evaluate one layer; `None` when the layer is defective at this frame.
pub fn evaluate_layer(layer: &LayerSpec, ctx: &EvalCtx) -> Option<VisualState> {
    try_evaluate_layer(layer, ctx).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mod.rs"]
mod tests;
