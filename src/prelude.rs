pub use crate::builder::IndexedHeapBuilder;
pub use crate::ds::{IndexedHeap, PositionIndex};
pub use crate::error::{HeapError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::IndexedHeapMetricsSnapshot;
pub use crate::order::HeapOrder;
pub use crate::traits::IndexedPriorityQueue;
