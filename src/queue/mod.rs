//! Partitioned Fan-Out/Fan-In Queue
//!
//! A blocking, hash-partitioned, multi-producer queue used to connect
//! pipeline stages without explicit locking at the call site.
//!
//! # Overview
//!
//! Two components compose the core:
//!
//! - [`PartitionLane`]: a blocking queue between many producers and one
//!   designated consumer, with an explicit close signal that permanently
//!   unblocks waiting consumers.
//! - [`PartitionedQueue`]: a fixed set of `N` lanes; every emitted value is
//!   routed to exactly one lane by its hash modulo `N`, so identical values
//!   always reach the same consumer.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌────────────┐
//! │ Producer A │   │ Producer B │   │ Producer C │
//! └─────┬──────┘   └─────┬──────┘   └─────┬──────┘
//!       │ emit           │ emit           │ emit
//!       ▼                ▼                ▼
//! ┌─────────────────────────────────────────────────┐
//! │          PartitionedQueue (hash mod N)          │
//! │  ┌──────────────┬──────────────┬─────────────┐  │
//! │  │    lane 0    │    lane 1    │   lane 2    │  │
//! │  └──────┬───────┴──────┬───────┴──────┬──────┘  │
//! └─────────┼──────────────┼──────────────┼─────────┘
//!           │ consume      │ consume      │ consume
//!     ┌─────┴─────┐  ┌─────┴─────┐  ┌─────┴─────┐
//!     │Consumer 0 │  │Consumer 1 │  │Consumer 2 │  (one per lane)
//!     └───────────┘  └───────────┘  └───────────┘
//! ```
//!
//! Producers never block; `consume` is the only blocking operation. After
//! all producers for a queue have finished, the producing side calls
//! [`PartitionedQueue::close`] exactly once; consumers then drain whatever
//! is buffered and observe closure. Closing is the caller's liveness
//! obligation: a producer that never closes leaves its consumers blocked
//! forever.

mod consumer;
mod error;
mod lane;
mod partitioned;
mod producer;
mod types;

pub mod api;

pub use consumer::LaneConsumer;
pub use error::{QueueError, QueueResult};
pub use lane::PartitionLane;
pub use partitioned::PartitionedQueue;
pub use producer::QueueProducer;
pub use types::QueueStats;

#[cfg(test)]
mod tests;
