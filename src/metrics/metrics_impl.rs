use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::IndexedHeapMetricsSnapshot;
use crate::metrics::traits::{
    CoreMetricsRecorder, IndexedHeapMetricsReadRecorder, IndexedHeapMetricsRecorder,
};

// ---------------------------------------------------------------------------
// IndexedHeapMetrics
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct IndexedHeapMetrics {
    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_rejected: u64,
    pub change_priority_calls: u64,
    pub change_priority_found: u64,
    pub change_priority_rejected: u64,
    pub remove_calls: u64,
    pub removed_entries: u64,
    pub remove_rejected: u64,
    pub pop_top_calls: u64,
    pub pop_top_found: u64,
    pub pop_top_empty: u64,
    pub sift_up_swaps: u64,
    pub sift_down_swaps: u64,
    pub clear_calls: u64,
    pub peek_top_calls: MetricsCell,
    pub peek_top_found: MetricsCell,
    pub priority_calls: MetricsCell,
    pub priority_found: MetricsCell,
}

impl IndexedHeapMetrics {
    /// Copies the counters and attaches the given gauges.
    pub fn snapshot(&self, len: usize, capacity: usize) -> IndexedHeapMetricsSnapshot {
        IndexedHeapMetricsSnapshot {
            insert_calls: self.insert_calls,
            insert_new: self.insert_new,
            insert_rejected: self.insert_rejected,
            change_priority_calls: self.change_priority_calls,
            change_priority_found: self.change_priority_found,
            change_priority_rejected: self.change_priority_rejected,
            remove_calls: self.remove_calls,
            removed_entries: self.removed_entries,
            remove_rejected: self.remove_rejected,
            pop_top_calls: self.pop_top_calls,
            pop_top_found: self.pop_top_found,
            pop_top_empty: self.pop_top_empty,
            peek_top_calls: self.peek_top_calls.get(),
            peek_top_found: self.peek_top_found.get(),
            priority_calls: self.priority_calls.get(),
            priority_found: self.priority_found.get(),
            sift_up_swaps: self.sift_up_swaps,
            sift_down_swaps: self.sift_down_swaps,
            clear_calls: self.clear_calls,
            len,
            capacity,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl CoreMetricsRecorder for IndexedHeapMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }
    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }
    fn record_insert_rejected(&mut self) {
        self.insert_rejected += 1;
    }
    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }
    fn record_removed_entry(&mut self) {
        self.removed_entries += 1;
    }
    fn record_remove_rejected(&mut self) {
        self.remove_rejected += 1;
    }
    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl IndexedHeapMetricsRecorder for IndexedHeapMetrics {
    fn record_change_priority_call(&mut self) {
        self.change_priority_calls += 1;
    }
    fn record_change_priority_found(&mut self) {
        self.change_priority_found += 1;
    }
    fn record_change_priority_rejected(&mut self) {
        self.change_priority_rejected += 1;
    }
    fn record_pop_top_call(&mut self) {
        self.pop_top_calls += 1;
    }
    fn record_pop_top_found(&mut self) {
        self.pop_top_found += 1;
    }
    fn record_pop_top_empty(&mut self) {
        self.pop_top_empty += 1;
    }
    fn record_sift_up_swap(&mut self) {
        self.sift_up_swaps += 1;
    }
    fn record_sift_down_swap(&mut self) {
        self.sift_down_swaps += 1;
    }
}

impl IndexedHeapMetricsReadRecorder for IndexedHeapMetrics {
    fn record_peek_top_call(&self) {
        self.peek_top_calls.incr();
    }
    fn record_peek_top_found(&self) {
        self.peek_top_found.incr();
    }
    fn record_priority_call(&self) {
        self.priority_calls.incr();
    }
    fn record_priority_found(&self) {
        self.priority_found.incr();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_flow_into_snapshot() {
        let mut metrics = IndexedHeapMetrics::default();
        metrics.record_insert_call();
        metrics.record_insert_new();
        metrics.record_sift_up_swap();
        metrics.record_sift_down_swap();
        metrics.record_sift_down_swap();
        metrics.record_peek_top_call();

        let snap = metrics.snapshot(1, 8);
        assert_eq!(snap.insert_calls, 1);
        assert_eq!(snap.insert_new, 1);
        assert_eq!(snap.total_swaps(), 3);
        assert_eq!(snap.peek_top_calls, 1);
        assert_eq!(snap.len, 1);
        assert_eq!(snap.capacity, 8);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut metrics = IndexedHeapMetrics::default();
        metrics.record_pop_top_call();
        metrics.record_priority_call();
        metrics.reset();
        assert_eq!(metrics.snapshot(0, 1), IndexedHeapMetricsSnapshot {
            capacity: 1,
            ..Default::default()
        });
    }
}
