/// Point-in-time copy of an [`IndexedHeap`](crate::ds::IndexedHeap)'s counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexedHeapMetricsSnapshot {
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

    pub peek_top_calls: u64,
    pub peek_top_found: u64,

    pub priority_calls: u64,
    pub priority_found: u64,

    pub sift_up_swaps: u64,
    pub sift_down_swaps: u64,

    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl IndexedHeapMetricsSnapshot {
    /// Total slot swaps performed by both sift directions.
    pub fn total_swaps(&self) -> u64 {
        self.sift_up_swaps + self.sift_down_swaps
    }
}
