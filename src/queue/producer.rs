//! Producer handle for emitting into a partitioned queue
//!
//! Producers are cheap, cloneable handles; any number of them may emit into
//! the same queue concurrently. The name is carried for trace logging only.

use crate::queue::error::QueueResult;
use crate::queue::partitioned::PartitionedQueue;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

/// Emitting handle for a [`PartitionedQueue`]
///
/// Handles share ownership of the queue, so a queue stays alive for as long
/// as any producer for it does. Emission never blocks.
#[derive(Debug)]
pub struct QueueProducer<T, S = RandomState> {
    name: String,
    queue: Arc<PartitionedQueue<T, S>>,
}

impl<T, S> QueueProducer<T, S> {
    pub(crate) fn new(name: String, queue: Arc<PartitionedQueue<T, S>>) -> Self {
        Self { name, queue }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Hash, S: BuildHasher> QueueProducer<T, S> {
    /// Emit `value` into the lane selected by its hash.
    pub fn emit(&self, value: T) -> QueueResult<()> {
        let lane = self.queue.emit(value)?;
        log::trace!("{}: emitted into lane {}", self.name, lane);
        Ok(())
    }
}

impl<T, S> Clone for QueueProducer<T, S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            queue: Arc::clone(&self.queue),
        }
    }
}
