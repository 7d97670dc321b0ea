use crate::{
    eval::evaluator::{FrameOutput, evaluate_frame},
    foundation::error::{MotionError, MotionResult},
    scene::model::SceneSpec,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// How [`evaluate_frames`] spreads work. Output never depends on these settings.
pub struct EvalThreading {
    /// Evaluate on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Frames handed to the pool per round.
    pub chunk_size: usize,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Evaluate `frames` in the given order.
#[tracing::instrument(skip(scene, frames), fields(frames = frames.len()))]
pub fn evaluate_frames(
    scene: &SceneSpec,
    frames: &[u64],
    threading: &EvalThreading,
) -> MotionResult<Vec<FrameOutput>> {
    if !threading.parallel {
        return Ok(frames.iter().map(|&f| evaluate_frame(scene, f)).collect());
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = threading.chunk_size.max(1);
    let mut out = Vec::with_capacity(frames.len());
    for chunk in frames.chunks(chunk_size) {
        let mut evaluated: Vec<FrameOutput> = pool.install(|| {
            chunk
                .par_iter()
                .map(|&f| evaluate_frame(scene, f))
                .collect()
        });
        out.append(&mut evaluated);
    }
    tracing::debug!(
        frames = out.len(),
        threads = pool.current_num_threads(),
        "parallel batch done"
    );
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> MotionResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MotionError::evaluation(
            "evaluation threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MotionError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/batch.rs"]
mod tests;
