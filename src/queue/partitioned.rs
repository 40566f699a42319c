//! PartitionedQueue: hash-based sharding of one item stream across a fixed
//! set of independently-consumable lanes
//!
//! Routing is `hash(value) mod N` under a per-instance `BuildHasher`, so
//! identical values always land on the same lane of one queue. That is what
//! lets a downstream consumer keep per-distinct-value state (such as a
//! deduplicating word counter) without any cross-consumer coordination.

use crate::queue::consumer::LaneConsumer;
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::lane::PartitionLane;
use crate::queue::producer::QueueProducer;
use crate::queue::types::QueueStats;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A fixed set of lanes sharing one hashed item stream.
///
/// The lane count is set at construction and never changes. Producers emit
/// through [`emit`](PartitionedQueue::emit) (or a [`QueueProducer`] handle);
/// each lane is drained by the matching [`LaneConsumer`] until it reports
/// closure.
///
/// # Example
///
/// ```rust
/// use wordtally::queue::api::PartitionedQueue;
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue = Arc::new(PartitionedQueue::new(2));
/// let producer = queue.producer("example");
/// let consumers = queue.take_consumers().unwrap();
///
/// let workers: Vec<_> = consumers
///     .into_iter()
///     .map(|consumer| {
///         thread::spawn(move || {
///             let mut seen = 0;
///             while let Ok(Some(_word)) = consumer.consume() {
///                 seen += 1;
///             }
///             seen
///         })
///     })
///     .collect();
///
/// for word in ["a", "b", "a"] {
///     producer.emit(word.to_string()).unwrap();
/// }
/// queue.close().unwrap();
///
/// let total: usize = workers.into_iter().map(|w| w.join().unwrap()).sum();
/// assert_eq!(total, 3);
/// ```
#[derive(Debug)]
pub struct PartitionedQueue<T, S = RandomState> {
    lanes: Vec<PartitionLane<T>>,
    build_hasher: S,
    consumers_claimed: AtomicBool,
}

impl<T> PartitionedQueue<T> {
    /// Create a queue with `lanes` lanes and the default hasher.
    ///
    /// # Panics
    ///
    /// Panics if `lanes` is zero.
    pub fn new(lanes: usize) -> Self {
        Self::with_hasher(lanes, RandomState::new())
    }
}

impl<T, S> PartitionedQueue<T, S> {
    /// Create a queue routing through an explicitly supplied `BuildHasher`.
    ///
    /// # Panics
    ///
    /// Panics if `lanes` is zero.
    pub fn with_hasher(lanes: usize, build_hasher: S) -> Self {
        assert!(lanes > 0, "a partitioned queue needs at least one lane");
        Self {
            lanes: (0..lanes).map(|_| PartitionLane::new()).collect(),
            build_hasher,
            consumers_claimed: AtomicBool::new(false),
        }
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Blocking consume from lane `lane`.
    ///
    /// Out-of-range lane indexes are a programming error and panic via the
    /// slice bounds check.
    pub fn consume(&self, lane: usize) -> QueueResult<Option<T>> {
        self.lanes[lane].consume()
    }

    /// Close every lane.
    ///
    /// Intended to be called exactly once, after every producer for this
    /// queue has finished; lane close itself is idempotent.
    pub fn close(&self) -> QueueResult<()> {
        for lane in &self.lanes {
            lane.close()?;
        }
        Ok(())
    }

    /// Snapshot of per-lane backlog and closed state.
    pub fn stats(&self) -> QueueResult<QueueStats> {
        let mut pending_per_lane = Vec::with_capacity(self.lanes.len());
        let mut closed = true;
        for lane in &self.lanes {
            pending_per_lane.push(lane.pending()?);
            closed &= lane.is_closed()?;
        }
        let pending_total = pending_per_lane.iter().sum();

        Ok(QueueStats {
            lanes: self.lanes.len(),
            pending_per_lane,
            pending_total,
            closed,
        })
    }

    /// Create a named producer handle for this queue.
    pub fn producer(self: &Arc<Self>, name: impl Into<String>) -> QueueProducer<T, S> {
        QueueProducer::new(name.into(), Arc::clone(self))
    }

    /// Hand out the per-lane consumer handles, exactly once.
    ///
    /// Returns one [`LaneConsumer`] per lane, in lane order. A second call
    /// returns [`QueueError::ConsumersClaimed`]; single-consumer-per-lane is
    /// enforced by ownership of the handles.
    pub fn take_consumers(self: &Arc<Self>) -> QueueResult<Vec<LaneConsumer<T, S>>> {
        if self.consumers_claimed.swap(true, Ordering::SeqCst) {
            return Err(QueueError::ConsumersClaimed);
        }
        Ok((0..self.lanes.len())
            .map(|lane| LaneConsumer::new(Arc::clone(self), lane))
            .collect())
    }
}

impl<T: Hash, S: BuildHasher> PartitionedQueue<T, S> {
    /// The lane `value` routes to: a pure function of the value's hash.
    pub fn lane_for(&self, value: &T) -> usize {
        (self.build_hasher.hash_one(value) % self.lanes.len() as u64) as usize
    }

    /// Emit `value` into the lane selected by its hash.
    ///
    /// Returns the lane index the value was routed to. Never blocks; fails
    /// with [`QueueError::LaneClosed`] if the queue has been closed.
    pub fn emit(&self, value: T) -> QueueResult<usize> {
        let lane = self.lane_for(&value);
        self.lanes[lane].emit(value)?;
        Ok(lane)
    }
}
