//! Time-independent layout checks: estimated boxes, safe-zone bleed, overlap and spacing.

/// Box estimation and anchor placement.
pub mod geometry;
/// Bleed, overlap and spacing diagnostics.
pub mod validator;
