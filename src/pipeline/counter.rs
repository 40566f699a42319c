//! Distinct-word counter stage
//!
//! One counter drains one word lane. Because routing hashes each word,
//! every occurrence of a given word reaches the same lane, so per-lane
//! distinct counts never double count and their sum is the global distinct
//! count.

use crate::pipeline::error::PipelineResult;
use crate::queue::api::{LaneConsumer, QueueProducer};
use std::collections::HashSet;

/// Drain one word lane, then emit the number of distinct words seen into
/// the downstream count queue.
pub fn count_distinct(
    words: LaneConsumer<String>,
    counts: &QueueProducer<usize>,
) -> PipelineResult<usize> {
    let mut seen: HashSet<String> = HashSet::new();
    while let Some(word) = words.consume()? {
        seen.insert(word);
    }

    let distinct = seen.len();
    counts.emit(distinct)?;
    log::debug!("lane {}: {} distinct words", words.lane(), distinct);
    Ok(distinct)
}
