//! motionframe is a frame-deterministic animation and layout-validation engine.
//!
//! A scene is a JSON document of clips and layers. The engine never rasterizes; it resolves
//! what a renderer should draw:
//!
//! - Load and validate a [`SceneSpec`]
//! - Evaluate any frame on its own with [`evaluate_frame`], or a batch with
//!   [`evaluate_frames`]
//! - Check layout (safe-zone bleed, overlap, spacing) with [`validate_scene`]
//!
//! Every output is a pure function of the scene and the frame index.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing curves, springs, stagger delays and idle motion.
pub mod animation;
/// Per-layer evaluators producing [`VisualState`]s.
pub mod effects;
/// Scene composition, batches and frame fingerprints.
pub mod eval;
/// Shared primitives and the crate error.
pub mod foundation;
/// Bounding-box estimation and layout diagnostics.
pub mod layout;
/// Scene document model and schema validation.
pub mod scene;

pub use crate::animation::ease::Ease;
pub use crate::animation::spring::{Feel, SpringConfig};
pub use crate::effects::state::{EvalCtx, Extras, LayerDefect, VisualState};
pub use crate::eval::batch::{EvalThreading, evaluate_frames};
pub use crate::eval::evaluator::{ComposedLayer, EvalDiagnostic, FrameOutput, evaluate_frame};
pub use crate::eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::foundation::core::{Canvas, Fps, Point, Rect, Vec2};
pub use crate::foundation::error::{MotionError, MotionResult};
pub use crate::layout::geometry::{BoundingBox, Confidence};
pub use crate::layout::validator::{
    ClipValidation, Diagnostic, DiagnosticKind, ValidationReport, ValidatorConfig,
    validate_layers, validate_scene,
};
pub use crate::scene::model::SceneSpec;
