//! Queue Error Types

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Lane is closed to new items")]
    LaneClosed,

    #[error("Consumer handles for this queue have already been claimed")]
    ConsumersClaimed,

    #[error("Operation failed: {message}")]
    OperationFailed { message: String },
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
