//! Error types for the heapkit library.
//!
//! ## Key Components
//!
//! - [`HeapError`]: Returned by every fallible [`IndexedHeap`] operation
//!   (out-of-range id, duplicate insert, missing entry, empty queue, zero
//!   capacity).
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//!
//! A failing operation never mutates the heap, so the error is the whole
//! story: the offending id travels inside the variant.
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::error::HeapError;
//! use heapkit::{HeapOrder, IndexedHeap};
//!
//! let mut heap = IndexedHeap::new(4, HeapOrder::MinFirst);
//! heap.insert(1, 2.5).unwrap();
//!
//! assert_eq!(heap.insert(1, 9.0), Err(HeapError::DuplicateId { id: 1 }));
//! assert_eq!(
//!     heap.insert(7, 1.0),
//!     Err(HeapError::InvalidId { id: 7, capacity: 4 })
//! );
//!
//! // Zero capacity is caught without panicking
//! let bad = IndexedHeap::try_new(0, HeapOrder::MinFirst);
//! assert_eq!(bad.unwrap_err(), HeapError::InvalidCapacity);
//! ```
//!
//! [`IndexedHeap`]: crate::ds::IndexedHeap

use std::fmt;

// ---------------------------------------------------------------------------
// HeapError
// ---------------------------------------------------------------------------

/// Error returned by indexed heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// Construction was attempted with a capacity of zero.
    InvalidCapacity,
    /// The id lies outside `[0, capacity)`.
    InvalidId { id: usize, capacity: usize },
    /// `insert` targeted an id that already holds an entry.
    DuplicateId { id: usize },
    /// The id is in range but holds no entry.
    NotFound { id: usize },
    /// `pop_top` / `peek_top` on an empty heap.
    Empty,
}

impl HeapError {
    /// Returns the id the failed operation targeted, if it had one.
    #[inline]
    pub fn id(&self) -> Option<usize> {
        match *self {
            HeapError::InvalidId { id, .. }
            | HeapError::DuplicateId { id }
            | HeapError::NotFound { id } => Some(id),
            HeapError::InvalidCapacity | HeapError::Empty => None,
        }
    }
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidCapacity => f.write_str("capacity must be > 0"),
            HeapError::InvalidId { id, capacity } => {
                write!(f, "id {id} is out of range for capacity {capacity}")
            },
            HeapError::DuplicateId { id } => write!(f, "id {id} already has an entry"),
            HeapError::NotFound { id } => write!(f, "id {id} has no entry"),
            HeapError::Empty => f.write_str("heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal heap invariants are violated.
///
/// Produced by [`IndexedHeap::check_invariants`](crate::ds::IndexedHeap::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
