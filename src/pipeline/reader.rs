//! File reader stage
//!
//! Readers are the pipeline's producers: each one streams a file line by
//! line, splits on whitespace, and emits every word into the shared word
//! queue. Many readers run concurrently against the same queue.

use crate::pipeline::error::{PipelineError, PipelineResult};
use crate::queue::api::QueueProducer;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Emit every whitespace-separated word of `path` into `words`.
///
/// Returns the number of words emitted.
pub fn read_words(path: &Path, words: &QueueProducer<String>) -> PipelineResult<usize> {
    let file = File::open(path).map_err(|source| PipelineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut emitted = 0;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| PipelineError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        for word in line.split_whitespace() {
            words.emit(word.to_string())?;
            emitted += 1;
        }
    }

    log::debug!("{}: emitted {} words", path.display(), emitted);
    Ok(emitted)
}
