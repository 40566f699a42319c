//! Pipeline Error Types

use crate::queue::api::QueueError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to spawn {stage} thread: {source}")]
    ThreadSpawn {
        stage: &'static str,
        source: std::io::Error,
    },

    #[error("A {stage} worker panicked")]
    WorkerPanicked { stage: &'static str },

    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
