//! Shared primitives: canvas/fps types, the crate error, and deterministic math helpers.

/// Canvas, frame rate and small geometry types.
pub mod core;
/// Crate error type.
pub mod error;
/// Interpolation and deterministic hashing helpers.
pub mod math;
