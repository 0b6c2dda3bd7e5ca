//! heapkit: an indexed binary heap over a fixed universe of integer ids.
//!
//! See [`ds::indexed_heap`] for the layout and invariants.

pub mod builder;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod order;
pub mod prelude;
pub mod traits;

pub use builder::IndexedHeapBuilder;
pub use ds::IndexedHeap;
pub use error::{HeapError, InvariantError};
pub use order::HeapOrder;
pub use traits::IndexedPriorityQueue;
