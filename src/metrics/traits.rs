//! # Metrics Trait Hierarchy
//!
//! ```text
//!          ┌─────────────────────────────┐
//!          │     CoreMetricsRecorder     │
//!          │  insert / remove / clear    │
//!          └──────────────┬──────────────┘
//!                         │
//!                         ▼
//!          ┌─────────────────────────────┐     ┌─────────────────────────────────┐
//!          │ IndexedHeapMetricsRecorder  │     │ IndexedHeapMetricsReadRecorder  │
//!          │ change / pop_top / sifts    │     │ peek_top / priority  (&self)    │
//!          └─────────────────────────────┘     └─────────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsReset                 │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Recorders only write counters; providers only read them.

/// Counters shared by anything that stores entries.
pub trait CoreMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_rejected(&mut self);
    fn record_remove_call(&mut self);
    fn record_removed_entry(&mut self);
    fn record_remove_rejected(&mut self);
    fn record_clear(&mut self);
}

/// Counters specific to the indexed heap's mutating operations.
pub trait IndexedHeapMetricsRecorder: CoreMetricsRecorder {
    fn record_change_priority_call(&mut self);
    fn record_change_priority_found(&mut self);
    fn record_change_priority_rejected(&mut self);
    fn record_pop_top_call(&mut self);
    fn record_pop_top_found(&mut self);
    fn record_pop_top_empty(&mut self);
    fn record_sift_up_swap(&mut self);
    fn record_sift_down_swap(&mut self);
}

/// Counters for `&self` operations (uses interior mutability).
pub trait IndexedHeapMetricsReadRecorder {
    fn record_peek_top_call(&self);
    fn record_peek_top_found(&self);
    fn record_priority_call(&self);
    fn record_priority_found(&self);
}

/// Read a point-in-time copy of the counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}
