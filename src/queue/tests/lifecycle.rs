//! Tests for close semantics: drain before closure, idempotence, liveness

#[cfg(test)]
mod tests {
    use crate::queue::api::{PartitionLane, PartitionedQueue, QueueError};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_items_buffered_before_close_still_drain() {
        let lane = PartitionLane::new();
        for i in 0..3 {
            lane.emit(i).unwrap();
        }
        lane.close().unwrap();

        assert_eq!(lane.consume().unwrap(), Some(0));
        assert_eq!(lane.consume().unwrap(), Some(1));
        assert_eq!(lane.consume().unwrap(), Some(2));
        assert_eq!(lane.consume().unwrap(), None);
    }

    #[test]
    fn test_closure_is_idempotent() {
        // The close signal must not be "used up" by the first observer.
        let lane: PartitionLane<u8> = PartitionLane::new();
        lane.close().unwrap();

        for _ in 0..5 {
            assert_eq!(lane.consume().unwrap(), None);
        }
    }

    #[test]
    fn test_repeated_close_is_noop() {
        let lane: PartitionLane<u8> = PartitionLane::new();
        lane.close().unwrap();
        lane.close().unwrap();

        assert!(lane.is_closed().unwrap());
        assert_eq!(lane.consume().unwrap(), None);
        assert_eq!(lane.consume().unwrap(), None);
    }

    #[test]
    fn test_queue_close_closes_every_lane() {
        let queue: PartitionedQueue<String> = PartitionedQueue::new(4);
        queue.close().unwrap();

        assert!(queue.stats().unwrap().closed);
        for lane in 0..queue.lane_count() {
            assert_eq!(queue.consume(lane).unwrap(), None);
        }
    }

    #[test]
    fn test_emit_after_queue_close_is_rejected() {
        let queue = PartitionedQueue::new(2);
        queue.close().unwrap();

        match queue.emit("late".to_string()) {
            Err(QueueError::LaneClosed) => {}
            other => panic!("expected LaneClosed, got {:?}", other),
        }
    }

    #[test]
    fn test_blocked_consumer_wakes_on_close() {
        let lane: Arc<PartitionLane<u8>> = Arc::new(PartitionLane::new());

        let consumer_lane = Arc::clone(&lane);
        let consumer = thread::spawn(move || consumer_lane.consume().unwrap());

        // Give the consumer time to block before closing.
        thread::sleep(Duration::from_millis(50));
        lane.close().unwrap();

        assert_eq!(consumer.join().unwrap(), None);
    }

    #[test]
    fn test_blocked_consumer_wakes_on_emit() {
        let lane = Arc::new(PartitionLane::new());

        let consumer_lane = Arc::clone(&lane);
        let consumer = thread::spawn(move || consumer_lane.consume().unwrap());

        thread::sleep(Duration::from_millis(50));
        lane.emit("wake up".to_string()).unwrap();

        assert_eq!(consumer.join().unwrap(), Some("wake up".to_string()));
    }
}
