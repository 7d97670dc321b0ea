/// Result alias used throughout motionframe.
pub type MotionResult<T> = Result<T, MotionError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for motionframe operations.
///
/// Only structural failures surface here. Per-layer parameter problems are recovered locally
/// and reported as diagnostics on the evaluated frame instead.
pub enum MotionError {
    /// Input does not match the scene/clip/layer shape.
    #[error("schema violation at {path}: {message}")]
    SchemaViolation {
        /// JSON-path style location of the offending value (e.g. `$.clips[0].id`).
        path: String,
        /// Human readable description.
        message: String,
    },

    /// Evaluation failed for reasons outside a single layer.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// JSON (de)serialization error.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::SchemaViolation`].
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Build a [`MotionError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`MotionError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` when the error is a schema violation.
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::SchemaViolation { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
