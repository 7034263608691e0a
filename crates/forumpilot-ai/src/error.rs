use forumpilot_inference::InferenceError;
use thiserror::Error;

/// Why a remote result could not be used. Every variant is absorbed by a
/// heuristic fallback before reaching callers.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("inference task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("response has no {0}")]
    MissingField(&'static str),
}
