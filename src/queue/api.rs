//! Public API for the queue system
//!
//! External modules should import from here rather than directly from the
//! internal modules.

pub use crate::queue::consumer::LaneConsumer;
pub use crate::queue::error::{QueueError, QueueResult};
pub use crate::queue::lane::PartitionLane;
pub use crate::queue::partitioned::PartitionedQueue;
pub use crate::queue::producer::QueueProducer;
pub use crate::queue::types::QueueStats;
