//! Count aggregation stage
//!
//! The final fan-in: a single consumer sums the per-lane distinct counts
//! into the pipeline's answer.

use crate::pipeline::error::PipelineResult;
use crate::queue::api::LaneConsumer;

/// Drain the count lane and return the sum of all emitted counts.
pub fn sum_counts(counts: LaneConsumer<usize>) -> PipelineResult<usize> {
    let mut total = 0;
    while let Some(count) = counts.consume()? {
        total += count;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::api::PartitionedQueue;
    use std::sync::Arc;

    #[test]
    fn test_sum_counts_totals_all_emissions() {
        let counts = Arc::new(PartitionedQueue::new(1));
        let producer = counts.producer("test");

        for count in [3usize, 0, 7, 2] {
            producer.emit(count).unwrap();
        }
        counts.close().unwrap();

        let consumer = counts.take_consumers().unwrap().remove(0);
        assert_eq!(sum_counts(consumer).unwrap(), 12);
    }

    #[test]
    fn test_sum_counts_closed_empty_is_zero() {
        let counts: Arc<PartitionedQueue<usize>> = Arc::new(PartitionedQueue::new(1));
        counts.close().unwrap();

        let consumer = counts.take_consumers().unwrap().remove(0);
        assert_eq!(sum_counts(consumer).unwrap(), 0);
    }
}
