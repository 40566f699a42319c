//! Pipeline wiring: fan readers out over a word queue, counters over a
//! count queue, and a single aggregator at the fan-in
//!
//! The shutdown sequencing here is load-bearing: a queue may only be closed
//! after every producer for it has been joined, otherwise late emits race
//! shutdown. The runner therefore joins readers before closing the word
//! queue, and joins counters before closing the count queue. Both closes
//! happen even when a stage reports an error, so no worker is ever left
//! blocked on a lane that will never close.

use crate::pipeline::aggregator::sum_counts;
use crate::pipeline::counter::count_distinct;
use crate::pipeline::error::{PipelineError, PipelineResult};
use crate::pipeline::reader::read_words;
use crate::queue::api::PartitionedQueue;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Final pipeline summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    /// Input files read
    pub files: usize,
    /// Total words emitted by the readers
    pub words: usize,
    /// Distinct words across all input files
    pub distinct_words: usize,
}

/// Run the word-count pipeline over `paths` with `counters` counter lanes.
///
/// Spawns one reader thread per input file, one counter thread per word
/// lane, and a single aggregator thread, then joins them in stage order.
/// The first error observed is returned once every worker has been joined
/// and both queues are closed.
///
/// # Panics
///
/// Panics if `counters` is zero (the word queue requires at least one lane).
pub fn run(paths: &[PathBuf], counters: usize) -> PipelineResult<PipelineReport> {
    let words: Arc<PartitionedQueue<String>> = Arc::new(PartitionedQueue::new(counters));
    let counts: Arc<PartitionedQueue<usize>> = Arc::new(PartitionedQueue::new(1));

    let mut first_error: Option<PipelineError> = None;

    // Consumers first, so every lane is owned before any word arrives.
    let mut counter_workers = Vec::with_capacity(counters);
    for consumer in words.take_consumers()? {
        let producer = counts.producer(format!("counter-{}", consumer.lane()));
        let spawned = thread::Builder::new()
            .name(format!("counter-{}", consumer.lane()))
            .spawn(move || count_distinct(consumer, &producer))
            .map_err(|source| PipelineError::ThreadSpawn {
                stage: "counter",
                source,
            });
        match spawned {
            Ok(handle) => counter_workers.push(handle),
            Err(e) => record_error(&mut first_error, e),
        }
    }

    let aggregator = {
        let consumer = counts.take_consumers()?.remove(0);
        thread::Builder::new()
            .name("aggregator".to_string())
            .spawn(move || sum_counts(consumer))
            .map_err(|source| PipelineError::ThreadSpawn {
                stage: "aggregator",
                source,
            })
    };
    let aggregator = match aggregator {
        Ok(handle) => Some(handle),
        Err(e) => {
            record_error(&mut first_error, e);
            None
        }
    };

    let mut readers = Vec::with_capacity(paths.len());
    for (id, path) in paths.iter().enumerate() {
        let producer = words.producer(format!("reader-{id}"));
        let path = path.clone();
        let spawned = thread::Builder::new()
            .name(format!("reader-{id}"))
            .spawn(move || read_words(&path, &producer))
            .map_err(|source| PipelineError::ThreadSpawn {
                stage: "reader",
                source,
            });
        match spawned {
            Ok(handle) => readers.push(handle),
            Err(e) => record_error(&mut first_error, e),
        }
    }

    // Join all word producers before closing the word queue.
    let mut words_emitted = 0;
    for handle in readers {
        match join_worker(handle, "reader") {
            Ok(emitted) => words_emitted += emitted,
            Err(e) => record_error(&mut first_error, e),
        }
    }
    if let Ok(stats) = words.stats() {
        log::debug!("word queue backlog at close: {:?}", stats.pending_per_lane);
    }
    words.close()?;

    // Counters are the count queue's producers; same ordering again.
    for handle in counter_workers {
        if let Err(e) = join_worker(handle, "counter") {
            record_error(&mut first_error, e);
        }
    }
    counts.close()?;

    let distinct_words = match aggregator.map(|handle| join_worker(handle, "aggregator")) {
        Some(Ok(total)) => total,
        Some(Err(e)) => {
            record_error(&mut first_error, e);
            0
        }
        None => 0,
    };

    if let Some(error) = first_error {
        return Err(error);
    }

    Ok(PipelineReport {
        files: paths.len(),
        words: words_emitted,
        distinct_words,
    })
}

fn join_worker<T>(handle: JoinHandle<PipelineResult<T>>, stage: &'static str) -> PipelineResult<T> {
    handle
        .join()
        .map_err(|_| PipelineError::WorkerPanicked { stage })?
}

fn record_error(first_error: &mut Option<PipelineError>, error: PipelineError) {
    log::error!("pipeline stage failed: {error}");
    first_error.get_or_insert(error);
}
