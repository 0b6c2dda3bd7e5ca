//! Operation counters for [`IndexedHeap`](crate::ds::IndexedHeap).
//!
//! Compiled only with the `metrics` feature. Recording, snapshotting and
//! resetting are split into small traits the same way for every recorder;
//! counters are observational and never influence heap behavior.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use metrics_impl::IndexedHeapMetrics;
pub use snapshot::IndexedHeapMetricsSnapshot;
