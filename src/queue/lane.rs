//! PartitionLane: a blocking hand-off queue between many producers and one
//! designated consumer
//!
//! A lane pairs a mutex-protected store with a counting wake mechanism: every
//! `emit` contributes one signal plus one item, and `close` contributes one
//! signal without an item. A woken consumer tells the two apart by inspecting
//! the store under the lock, so emits and the close notification are consumed
//! strictly in arrival order and buffered items always drain before closure
//! is reported.
//!
//! Delivery within a lane is FIFO. Once a lane reports closure it keeps
//! reporting it; the close signal is backed by a permanent closed flag and
//! cannot be "used up" by a single consume call.

use crate::core::sync::handle_lock_poison;
use crate::queue::error::{QueueError, QueueResult};
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};

/// Store and bookkeeping shared by the producers and the consumer of a lane.
///
/// Invariant: `wakes` equals the number of queued items, plus one if the
/// close notification has been issued but not yet observed by a consume.
#[derive(Debug)]
struct LaneState<T> {
    items: VecDeque<T>,
    wakes: usize,
    closed: bool,
}

/// A single-consumer blocking queue with an explicit close signal.
///
/// Any number of producers may call [`emit`](PartitionLane::emit)
/// concurrently without external synchronisation. Exactly one task is meant
/// to call [`consume`](PartitionLane::consume) in a loop until it returns
/// `Ok(None)`; concurrent consumers on one lane are not a supported pattern,
/// but they serialise on the lane mutex and cannot corrupt state.
#[derive(Debug)]
pub struct PartitionLane<T> {
    state: Mutex<LaneState<T>>,
    wake: Condvar,
}

impl<T> PartitionLane<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LaneState {
                items: VecDeque::new(),
                wakes: 0,
                closed: false,
            }),
            wake: Condvar::new(),
        }
    }

    /// Append `value` to the lane and wake one waiting consumer call.
    ///
    /// Never blocks. Returns [`QueueError::LaneClosed`] if the lane has
    /// already been closed; items emitted before close are unaffected and
    /// will still be delivered.
    pub fn emit(&self, value: T) -> QueueResult<()> {
        let mut state = self.lock_state()?;
        if state.closed {
            return Err(QueueError::LaneClosed);
        }
        state.items.push_back(value);
        state.wakes += 1;
        drop(state);

        self.wake.notify_one();
        Ok(())
    }

    /// Block until an item is available or the lane is closed and drained.
    ///
    /// Returns `Ok(Some(value))` with ownership of the item, or `Ok(None)`
    /// once the lane is closed and every buffered item has been delivered.
    /// After the first `Ok(None)`, every subsequent call returns `Ok(None)`
    /// immediately.
    pub fn consume(&self) -> QueueResult<Option<T>> {
        let mut state = self.lock_state()?;
        loop {
            if state.wakes > 0 {
                state.wakes -= 1;
                // An empty store at this point means the signal we took was
                // the close notification, not an item.
                return Ok(state.items.pop_front());
            }
            if state.closed {
                return Ok(None);
            }
            state = handle_lock_poison(self.wake.wait(state), |message| {
                QueueError::OperationFailed { message }
            })?;
        }
    }

    /// Mark the lane closed and wake every blocked consume call.
    ///
    /// Items already queued are still delivered before closure is reported.
    /// Closing an already-closed lane is a no-op.
    pub fn close(&self) -> QueueResult<()> {
        let mut state = self.lock_state()?;
        if state.closed {
            return Ok(());
        }
        state.closed = true;
        state.wakes += 1;
        drop(state);

        self.wake.notify_all();
        Ok(())
    }

    /// Number of items queued but not yet consumed.
    pub fn pending(&self) -> QueueResult<usize> {
        Ok(self.lock_state()?.items.len())
    }

    pub fn is_closed(&self) -> QueueResult<bool> {
        Ok(self.lock_state()?.closed)
    }

    fn lock_state(&self) -> QueueResult<MutexGuard<'_, LaneState<T>>> {
        handle_lock_poison(self.state.lock(), |message| QueueError::OperationFailed {
            message,
        })
    }
}

impl<T> Default for PartitionLane<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lane_is_open_and_empty() {
        let lane: PartitionLane<u32> = PartitionLane::new();

        assert_eq!(lane.pending().unwrap(), 0);
        assert!(!lane.is_closed().unwrap());
    }

    #[test]
    fn test_emit_then_consume_transfers_ownership() {
        let lane = PartitionLane::new();

        lane.emit("alpha".to_string()).unwrap();
        lane.emit("beta".to_string()).unwrap();

        assert_eq!(lane.pending().unwrap(), 2);
        assert_eq!(lane.consume().unwrap(), Some("alpha".to_string()));
        assert_eq!(lane.consume().unwrap(), Some("beta".to_string()));
        assert_eq!(lane.pending().unwrap(), 0);
    }

    #[test]
    fn test_close_signal_is_distinct_from_items() {
        let lane = PartitionLane::new();

        lane.emit(7).unwrap();
        lane.close().unwrap();

        // The buffered item drains first, then closure is reported.
        assert_eq!(lane.consume().unwrap(), Some(7));
        assert_eq!(lane.consume().unwrap(), None);
    }

    #[test]
    fn test_emit_after_close_is_rejected() {
        let lane = PartitionLane::new();
        lane.close().unwrap();

        match lane.emit(1) {
            Err(QueueError::LaneClosed) => {}
            other => panic!("expected LaneClosed, got {:?}", other),
        }
    }
}
