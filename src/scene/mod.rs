//! Scene document: serde boundary types plus structural validation.

/// JSON loading and validation entry points on [`model::SceneSpec`].
pub mod document;
/// Scene, clip and layer types.
pub mod model;
pub(crate) mod validate;
