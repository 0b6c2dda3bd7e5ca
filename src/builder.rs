//! Builder for [`IndexedHeap`].
//!
//! ## Example
//!
//! ```rust
//! use heapkit::builder::IndexedHeapBuilder;
//!
//! let mut heap = IndexedHeapBuilder::new(100).max_first().build();
//! heap.insert(7, 1.0).unwrap();
//! heap.insert(9, 4.0).unwrap();
//! assert_eq!(heap.peek_top(), Ok((9, 4.0)));
//! ```

use crate::ds::IndexedHeap;
use crate::error::HeapError;
use crate::order::HeapOrder;

/// Configures capacity and ordering before creating an [`IndexedHeap`].
///
/// Defaults to min-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedHeapBuilder {
    capacity: usize,
    order: HeapOrder,
}

impl IndexedHeapBuilder {
    /// Creates a builder for ids `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: HeapOrder::default(),
        }
    }

    pub fn order(mut self, order: HeapOrder) -> Self {
        self.order = order;
        self
    }

    pub fn min_first(self) -> Self {
        self.order(HeapOrder::MinFirst)
    }

    pub fn max_first(self) -> Self {
        self.order(HeapOrder::MaxFirst)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Builds the heap.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero. Use [`try_build`](Self::try_build) for
    /// user-supplied parameters.
    pub fn build(self) -> IndexedHeap {
        IndexedHeap::new(self.capacity, self.order)
    }

    /// Builds the heap, reporting an invalid capacity as an error.
    ///
    /// ```
    /// use heapkit::{HeapError, IndexedHeapBuilder};
    ///
    /// assert_eq!(
    ///     IndexedHeapBuilder::new(0).try_build().unwrap_err(),
    ///     HeapError::InvalidCapacity
    /// );
    /// ```
    pub fn try_build(self) -> Result<IndexedHeap, HeapError> {
        IndexedHeap::try_new(self.capacity, self.order)
    }
}
