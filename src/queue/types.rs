//! Type definitions for the queue system

/// Backlog snapshot for a partitioned queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStats {
    /// Number of lanes
    pub lanes: usize,
    /// Items queued but not yet consumed, per lane
    pub pending_per_lane: Vec<usize>,
    /// Items queued but not yet consumed, across all lanes
    pub pending_total: usize,
    /// Whether every lane has been closed
    pub closed: bool,
}
