//! Time → progress conversions shared by every evaluator.
//!
//! Everything in this module is a pure function of its arguments. Nothing caches or carries
//! state between calls, which is what lets the composer evaluate any frame in isolation.

/// Continuous (post-entrance) periodic motion.
pub mod continuous;
/// Bezier and closed-form easing curves.
pub mod ease;
/// Damped-spring progress and named feels.
pub mod spring;
/// Per-item stagger delays.
pub mod stagger;
/// Linear progress and timing resolution.
pub mod timing;
