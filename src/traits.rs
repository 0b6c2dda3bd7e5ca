//! # Indexed Priority Queue Trait
//!
//! The id-addressed call surface shared by every queue in this crate and by
//! anything that wants to stand in for one (a brute-force reference queue in
//! a test harness, an instrumented wrapper, ...).
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                 IndexedPriorityQueue                     │
//!   │                                                          │
//!   │  capacity(&) → usize          len(&) → usize             │
//!   │  contains(&, id) → bool       is_empty(&) → bool         │
//!   │                                                          │
//!   │  insert(&mut, id, p)          → Result<(), HeapError>    │
//!   │  change_priority(&mut, id, p) → Result<f64, HeapError>   │
//!   │  remove(&mut, id)             → Result<f64, HeapError>   │
//!   │  priority(&, id)              → Result<f64, HeapError>   │
//!   │  peek_top(&)                  → Result<(id, p), ...>     │
//!   │  pop_top(&mut)                → Result<(id, p), ...>     │
//!   │                                                          │
//!   │  pop_top_batch(&mut, n)  (default: loops pop_top)        │
//!   └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations must agree on observable results: same errors for the
//! same misuse, and the same top under the tie-break documented on
//! [`HeapOrder::precedes`](crate::order::HeapOrder::precedes).

use crate::ds::IndexedHeap;
use crate::error::HeapError;

/// Priority queue over ids `0..capacity`, one entry per id.
///
/// # Example
///
/// ```
/// use heapkit::{HeapOrder, IndexedHeap, IndexedPriorityQueue};
///
/// fn load<Q: IndexedPriorityQueue>(queue: &mut Q, priorities: &[f64]) {
///     for (id, &p) in priorities.iter().enumerate() {
///         queue.insert(id, p).unwrap();
///     }
/// }
///
/// let mut heap = IndexedHeap::new(4, HeapOrder::MinFirst);
/// load(&mut heap, &[4.0, 2.0, 3.0]);
/// assert_eq!(heap.pop_top_batch(2), vec![(1, 2.0), (2, 3.0)]);
/// ```
pub trait IndexedPriorityQueue {
    /// Number of addressable ids.
    fn capacity(&self) -> usize;

    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `id` holds an entry.
    fn contains(&self, id: usize) -> bool;

    /// Adds an entry for a vacant id.
    fn insert(&mut self, id: usize, priority: f64) -> Result<(), HeapError>;

    /// Overwrites a live entry's priority, returning the previous value.
    fn change_priority(&mut self, id: usize, priority: f64) -> Result<f64, HeapError>;

    /// Removes a live entry, returning its priority.
    fn remove(&mut self, id: usize) -> Result<f64, HeapError>;

    /// Reads a live entry's priority.
    fn priority(&self, id: usize) -> Result<f64, HeapError>;

    /// Reads the top entry.
    fn peek_top(&self) -> Result<(usize, f64), HeapError>;

    /// Removes and returns the top entry.
    fn pop_top(&mut self) -> Result<(usize, f64), HeapError>;

    /// Pops up to `count` entries, top first.
    fn pop_top_batch(&mut self, count: usize) -> Vec<(usize, f64)> {
        let mut popped = Vec::with_capacity(count.min(self.len()));
        for _ in 0..count {
            match self.pop_top() {
                Ok(entry) => popped.push(entry),
                Err(_) => break,
            }
        }
        popped
    }
}

impl IndexedPriorityQueue for IndexedHeap {
    #[inline]
    fn capacity(&self) -> usize {
        IndexedHeap::capacity(self)
    }

    #[inline]
    fn len(&self) -> usize {
        IndexedHeap::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        IndexedHeap::is_empty(self)
    }

    #[inline]
    fn contains(&self, id: usize) -> bool {
        IndexedHeap::contains(self, id)
    }

    fn insert(&mut self, id: usize, priority: f64) -> Result<(), HeapError> {
        IndexedHeap::insert(self, id, priority)
    }

    fn change_priority(&mut self, id: usize, priority: f64) -> Result<f64, HeapError> {
        IndexedHeap::change_priority(self, id, priority)
    }

    fn remove(&mut self, id: usize) -> Result<f64, HeapError> {
        IndexedHeap::remove(self, id)
    }

    fn priority(&self, id: usize) -> Result<f64, HeapError> {
        IndexedHeap::priority(self, id)
    }

    fn peek_top(&self) -> Result<(usize, f64), HeapError> {
        IndexedHeap::peek_top(self)
    }

    fn pop_top(&mut self) -> Result<(usize, f64), HeapError> {
        IndexedHeap::pop_top(self)
    }
}
