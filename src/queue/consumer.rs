//! Per-lane consumer handle
//!
//! Each consumer owns exactly one lane of a partitioned queue; the full set
//! is handed out once by [`PartitionedQueue::take_consumers`], which is what
//! enforces the single-consumer-per-lane discipline. A consumer loops on
//! [`consume`](LaneConsumer::consume) until it returns `Ok(None)`.

use crate::queue::error::QueueResult;
use crate::queue::partitioned::PartitionedQueue;
use std::collections::hash_map::RandomState;
use std::sync::Arc;

/// Consuming handle bound to one lane of a [`PartitionedQueue`]
#[derive(Debug)]
pub struct LaneConsumer<T, S = RandomState> {
    queue: Arc<PartitionedQueue<T, S>>,
    lane: usize,
}

impl<T, S> LaneConsumer<T, S> {
    pub(crate) fn new(queue: Arc<PartitionedQueue<T, S>>, lane: usize) -> Self {
        Self { queue, lane }
    }

    /// The lane index this consumer drains.
    pub fn lane(&self) -> usize {
        self.lane
    }

    /// Block until an item arrives on this lane or the lane is closed and
    /// drained. `Ok(None)` means no item will ever arrive again.
    pub fn consume(&self) -> QueueResult<Option<T>> {
        self.queue.consume(self.lane)
    }

    /// Collect up to `max` items, blocking between items.
    ///
    /// Returns early with fewer than `max` items once the lane reports
    /// closure; an empty vector means the lane was already closed and
    /// drained.
    pub fn consume_batch(&self, max: usize) -> QueueResult<Vec<T>> {
        let mut batch = Vec::with_capacity(max);
        for _ in 0..max {
            match self.consume()? {
                Some(value) => batch.push(value),
                None => break,
            }
        }
        Ok(batch)
    }
}
