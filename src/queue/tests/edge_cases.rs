//! Tests for routing determinism, misuse handling, and boundary conditions

#[cfg(test)]
mod tests {
    use crate::queue::api::{PartitionedQueue, QueueError};
    use std::hash::{BuildHasher, Hasher};
    use std::sync::Arc;

    #[test]
    fn test_identical_values_route_to_one_lane() {
        for lanes in [1, 2, 3, 8, 16] {
            let queue = PartitionedQueue::new(lanes);
            for _ in 0..5 {
                queue.emit("same-value".to_string()).unwrap();
            }

            let stats = queue.stats().unwrap();
            let occupied: Vec<usize> = stats
                .pending_per_lane
                .iter()
                .filter(|&&pending| pending > 0)
                .copied()
                .collect();
            assert_eq!(
                occupied,
                vec![5],
                "all 5 copies must share one lane for N = {lanes}"
            );
        }
    }

    #[test]
    fn test_lane_for_matches_emit() {
        let queue = PartitionedQueue::new(7);
        let value = "where-do-i-go".to_string();

        let predicted = queue.lane_for(&value);
        let actual = queue.emit(value).unwrap();
        assert_eq!(predicted, actual);
    }

    #[test]
    fn test_multi_lane_word_stream() {
        // N = 2, values {a, b, a, c}: all four delivered exactly once, and
        // both "a" occurrences on the same lane.
        let queue = PartitionedQueue::new(2);
        for word in ["a", "b", "a", "c"] {
            queue.emit(word.to_string()).unwrap();
        }
        queue.close().unwrap();

        let mut per_lane: Vec<Vec<String>> = Vec::new();
        for lane in 0..queue.lane_count() {
            let mut drained = Vec::new();
            while let Some(word) = queue.consume(lane).unwrap() {
                drained.push(word);
            }
            per_lane.push(drained);
        }

        let total: usize = per_lane.iter().map(|lane| lane.len()).sum();
        assert_eq!(total, 4);

        let a_lanes: Vec<usize> = per_lane
            .iter()
            .enumerate()
            .filter(|(_, lane)| lane.iter().any(|word| word == "a"))
            .map(|(index, _)| index)
            .collect();
        assert_eq!(a_lanes.len(), 1, "both \"a\" must land on a single lane");
        assert_eq!(
            per_lane[a_lanes[0]]
                .iter()
                .filter(|word| *word == "a")
                .count(),
            2
        );
    }

    #[test]
    #[should_panic(expected = "at least one lane")]
    fn test_zero_lanes_panics() {
        let _queue: PartitionedQueue<String> = PartitionedQueue::new(0);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_consume_panics() {
        let queue: PartitionedQueue<String> = PartitionedQueue::new(2);
        let _ = queue.consume(5);
    }

    #[test]
    fn test_consumers_claimed_once() {
        let queue: Arc<PartitionedQueue<String>> = Arc::new(PartitionedQueue::new(3));

        let consumers = queue.take_consumers().unwrap();
        assert_eq!(consumers.len(), 3);
        let lanes: Vec<usize> = consumers.iter().map(|consumer| consumer.lane()).collect();
        assert_eq!(lanes, vec![0, 1, 2]);

        match queue.take_consumers() {
            Err(QueueError::ConsumersClaimed) => {}
            other => panic!("expected ConsumersClaimed, got {:?}", other.map(|v| v.len())),
        }
    }

    // Routes everything to lane 0, whatever the input.
    struct ConstantHash;

    struct ConstantHasher;

    impl Hasher for ConstantHasher {
        fn finish(&self) -> u64 {
            0
        }

        fn write(&mut self, _bytes: &[u8]) {}
    }

    impl BuildHasher for ConstantHash {
        type Hasher = ConstantHasher;

        fn build_hasher(&self) -> ConstantHasher {
            ConstantHasher
        }
    }

    #[test]
    fn test_injected_hasher_controls_routing() {
        let queue = PartitionedQueue::with_hasher(4, ConstantHash);
        for word in ["a", "b", "c", "d", "e"] {
            assert_eq!(queue.emit(word.to_string()).unwrap(), 0);
        }

        let stats = queue.stats().unwrap();
        assert_eq!(stats.pending_per_lane, vec![5, 0, 0, 0]);
    }
}
