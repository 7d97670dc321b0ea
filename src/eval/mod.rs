//! Scene composition: resolve every visible layer at a scene frame.

/// Frame batches on a rayon pool.
pub mod batch;
/// Clip selection, transitions and paint order.
pub mod evaluator;
/// xxh3 digests of evaluated frames.
pub mod fingerprint;
