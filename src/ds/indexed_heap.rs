//! Indexed binary heap over a fixed universe of ids.
//!
//! A priority queue where every id in `0..capacity` holds at most one
//! `(priority, active)` entry. Besides popping the top, any entry can be
//! looked up, re-prioritized or removed by id in O(log n).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                       IndexedHeap Layout (min-first)                        │
//! │                                                                             │
//! │   ┌───────────────────────────────────────────────────────────────────┐     │
//! │   │  heap: Vec<Entry>   (heap-ordered, len() live entries)            │     │
//! │   │                                                                   │     │
//! │   │    slot:      0        1        2        3                        │     │
//! │   │           ┌────────┬────────┬────────┬────────┐                   │     │
//! │   │    id     │   3    │   1    │   2    │   0    │                   │     │
//! │   │    prio   │  1.0   │  3.0   │  9.0   │  7.0   │                   │     │
//! │   │           └────────┴────────┴────────┴────────┘                   │     │
//! │   │    parent(i) = (i - 1) / 2,  children(i) = 2i + 1, 2i + 2         │     │
//! │   └───────────────────────────────────────────────────────────────────┘     │
//! │                                                                             │
//! │   ┌───────────────────────────────────────────────────────────────────┐     │
//! │   │  index: PositionIndex   (id -> slot, capacity entries)            │     │
//! │   │                                                                   │     │
//! │   │    id:        0        1        2        3        4               │     │
//! │   │           ┌────────┬────────┬────────┬────────┬────────┐          │     │
//! │   │    slot   │   3    │   1    │   2    │   0    │  None  │          │     │
//! │   │           └────────┴────────┴────────┴────────┴────────┘          │     │
//! │   └───────────────────────────────────────────────────────────────────┘     │
//! │                                                                             │
//! │   Invariant: heap[index[id]].id == id for every live id                     │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!
//! Remove Flow
//! ───────────
//!   remove(1):
//!     1. slot = index[1]                 → 1
//!     2. heap.swap_remove(1)             (last entry, id 0, moves into slot 1)
//!     3. index[1] = None, index[0] = 1
//!     4. compare id 0 against its NEW parent and children:
//!          precedes parent?  sift_up(1)
//!          otherwise         sift_down(1)  (no-op if children are fine)
//! ```
//!
//! ## Key Concepts
//!
//! - **Single swap primitive**: only `sift_up` / `sift_down` exchange slots,
//!   and each exchange re-points both ids in the index before continuing
//! - **Fresh direction check**: after a priority change or a removal the
//!   moved entry is compared with its current neighbours, never with the
//!   value it replaced
//! - **Total order**: [`HeapOrder::precedes`] breaks priority ties by id, so
//!   the top is always the lowest id among the most extreme priorities
//!
//! ## Operations
//!
//! | Operation         | Description                             | Complexity |
//! |-------------------|-----------------------------------------|------------|
//! | `insert`          | Add an entry for a vacant id            | O(log n)   |
//! | `change_priority` | Overwrite priority, re-heapify          | O(log n)   |
//! | `remove`          | Remove by id (swap-with-last)           | O(log n)   |
//! | `pop_top`         | Remove and return the top entry         | O(log n)   |
//! | `peek_top`        | Read the top entry                      | O(1)       |
//! | `priority`        | Read an entry's priority                | O(1)       |
//! | `len`/`capacity`  | Counters                                | O(1)       |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::IndexedHeap;
//! use heapkit::HeapOrder;
//!
//! let mut heap = IndexedHeap::new(5, HeapOrder::MinFirst);
//! heap.insert(0, 7.0).unwrap();
//! heap.insert(1, 3.0).unwrap();
//! heap.insert(2, 9.0).unwrap();
//! heap.insert(3, 1.0).unwrap();
//!
//! assert_eq!(heap.pop_top(), Ok((3, 1.0)));
//! assert_eq!(heap.pop_top(), Ok((1, 3.0)));
//! assert_eq!(heap.len(), 2);
//!
//! heap.change_priority(2, 0.5).unwrap();
//! assert_eq!(heap.peek_top(), Ok((2, 0.5)));
//! ```
//!
//! ## Thread Safety
//!
//! `IndexedHeap` has no internal locking. Wrap it in a mutex for concurrent
//! access; every operation runs to completion and never blocks.

use tracing::debug;

use crate::ds::position_index::PositionIndex;
use crate::error::{HeapError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::IndexedHeapMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::IndexedHeapMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, IndexedHeapMetricsReadRecorder, IndexedHeapMetricsRecorder,
    MetricsReset, MetricsSnapshotProvider,
};
use crate::order::HeapOrder;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    id: usize,
    priority: f64,
}

impl Entry {
    #[inline]
    fn key(&self) -> (usize, f64) {
        (self.id, self.priority)
    }
}

/// Fixed-capacity priority queue addressed by integer id.
///
/// Ids range over `0..capacity`; each holds at most one entry. The ordering
/// mode ([`HeapOrder`]) and capacity are fixed for the heap's lifetime.
/// Entries are never handed out by reference, so callers cannot break the
/// heap by mutating a slot behind its back.
///
/// # Example
///
/// ```
/// use heapkit::{HeapError, HeapOrder, IndexedHeap};
///
/// let mut heap = IndexedHeap::new(3, HeapOrder::MaxFirst);
/// heap.insert(0, 5.0).unwrap();
/// heap.insert(1, 5.0).unwrap();
///
/// // equal priorities: the lower id wins
/// assert_eq!(heap.pop_top(), Ok((0, 5.0)));
/// assert_eq!(heap.priority(1), Ok(5.0));
/// assert_eq!(heap.priority(0), Err(HeapError::NotFound { id: 0 }));
/// ```
#[derive(Debug, Clone)]
pub struct IndexedHeap {
    heap: Vec<Entry>,
    index: PositionIndex,
    order: HeapOrder,
    #[cfg(feature = "metrics")]
    metrics: IndexedHeapMetrics,
}

impl IndexedHeap {
    /// Creates an empty heap for ids `0..capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for a
    /// fallible constructor.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::{HeapOrder, IndexedHeap};
    ///
    /// let heap = IndexedHeap::new(16, HeapOrder::MinFirst);
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), 16);
    /// ```
    pub fn new(capacity: usize, order: HeapOrder) -> Self {
        match Self::try_new(capacity, order) {
            Ok(heap) => heap,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty heap, rejecting a zero capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::{HeapError, HeapOrder, IndexedHeap};
    ///
    /// assert!(IndexedHeap::try_new(4, HeapOrder::MaxFirst).is_ok());
    /// assert_eq!(
    ///     IndexedHeap::try_new(0, HeapOrder::MaxFirst).unwrap_err(),
    ///     HeapError::InvalidCapacity
    /// );
    /// ```
    pub fn try_new(capacity: usize, order: HeapOrder) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(rejected("create", HeapError::InvalidCapacity));
        }
        Ok(Self {
            heap: Vec::with_capacity(capacity),
            index: PositionIndex::new(capacity),
            order,
            #[cfg(feature = "metrics")]
            metrics: IndexedHeapMetrics::default(),
        })
    }

    /// Number of ids the heap can address.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` once every id holds an entry.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.capacity()
    }

    #[inline]
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Returns `true` if `id` holds an entry. Out-of-range ids are absent.
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.index.contains(id)
    }

    /// Adds an entry for a vacant `id`.
    ///
    /// Fails with [`HeapError::InvalidId`] when `id >= capacity` and with
    /// [`HeapError::DuplicateId`] when `id` already holds an entry; the heap
    /// is left untouched in both cases.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::{HeapError, HeapOrder, IndexedHeap};
    ///
    /// let mut heap = IndexedHeap::new(2, HeapOrder::MinFirst);
    /// assert_eq!(heap.insert(0, 4.0), Ok(()));
    /// assert_eq!(heap.insert(0, 1.0), Err(HeapError::DuplicateId { id: 0 }));
    /// assert_eq!(heap.priority(0), Ok(4.0));
    /// ```
    pub fn insert(&mut self, id: usize, priority: f64) -> Result<(), HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Err(err) = self.check_vacant(id) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_rejected();
            return Err(rejected("insert", err));
        }

        let slot = self.heap.len();
        self.heap.push(Entry { id, priority });
        self.index.set(id, slot);
        self.sift_up(slot);

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();
        Ok(())
    }

    /// Overwrites the priority of a live entry and returns the old one.
    ///
    /// The entry moves up or down, never both, depending on how the new
    /// value compares with its current parent and children.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::{HeapOrder, IndexedHeap};
    ///
    /// let mut heap = IndexedHeap::new(3, HeapOrder::MinFirst);
    /// heap.insert(0, 1.0).unwrap();
    /// heap.insert(1, 2.0).unwrap();
    ///
    /// assert_eq!(heap.change_priority(0, 10.0), Ok(1.0));
    /// assert_eq!(heap.peek_top(), Ok((1, 2.0)));
    /// ```
    pub fn change_priority(&mut self, id: usize, priority: f64) -> Result<f64, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_change_priority_call();

        let slot = match self.slot_of(id) {
            Ok(slot) => slot,
            Err(err) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_change_priority_rejected();
                return Err(rejected("change_priority", err));
            },
        };

        let previous = std::mem::replace(&mut self.heap[slot].priority, priority);
        self.restore(slot);

        #[cfg(feature = "metrics")]
        self.metrics.record_change_priority_found();
        Ok(previous)
    }

    /// Removes the entry for `id` and returns its priority.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::{HeapError, HeapOrder, IndexedHeap};
    ///
    /// let mut heap = IndexedHeap::new(4, HeapOrder::MaxFirst);
    /// heap.insert(2, 8.0).unwrap();
    /// heap.insert(3, 6.0).unwrap();
    ///
    /// assert_eq!(heap.remove(2), Ok(8.0));
    /// assert_eq!(heap.remove(2), Err(HeapError::NotFound { id: 2 }));
    /// assert_eq!(heap.peek_top(), Ok((3, 6.0)));
    /// ```
    pub fn remove(&mut self, id: usize) -> Result<f64, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let slot = match self.slot_of(id) {
            Ok(slot) => slot,
            Err(err) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_remove_rejected();
                return Err(rejected("remove", err));
            },
        };

        let removed = self.remove_at(slot);

        #[cfg(feature = "metrics")]
        self.metrics.record_removed_entry();
        Ok(removed.priority)
    }

    /// Returns the priority of the entry for `id`.
    pub fn priority(&self, id: usize) -> Result<f64, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_priority_call();

        let slot = self.slot_of(id).map_err(|err| rejected("priority", err))?;

        #[cfg(feature = "metrics")]
        self.metrics.record_priority_found();
        Ok(self.heap[slot].priority)
    }

    /// Returns the top `(id, priority)` without removing it.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::{HeapError, HeapOrder, IndexedHeap};
    ///
    /// let mut heap = IndexedHeap::new(4, HeapOrder::MinFirst);
    /// assert_eq!(heap.peek_top(), Err(HeapError::Empty));
    ///
    /// heap.insert(1, 0.25).unwrap();
    /// assert_eq!(heap.peek_top(), Ok((1, 0.25)));
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn peek_top(&self) -> Result<(usize, f64), HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_top_call();

        let top = self
            .heap
            .first()
            .ok_or_else(|| rejected("peek_top", HeapError::Empty))?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_top_found();
        Ok(top.key())
    }

    /// Removes and returns the top `(id, priority)`.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::{HeapError, HeapOrder, IndexedHeap};
    ///
    /// let mut heap = IndexedHeap::new(4, HeapOrder::MaxFirst);
    /// heap.insert(0, 1.0).unwrap();
    /// heap.insert(3, 2.0).unwrap();
    ///
    /// assert_eq!(heap.pop_top(), Ok((3, 2.0)));
    /// assert_eq!(heap.pop_top(), Ok((0, 1.0)));
    /// assert_eq!(heap.pop_top(), Err(HeapError::Empty));
    /// ```
    pub fn pop_top(&mut self) -> Result<(usize, f64), HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_top_call();

        if self.heap.is_empty() {
            #[cfg(feature = "metrics")]
            self.metrics.record_pop_top_empty();
            return Err(rejected("pop_top", HeapError::Empty));
        }

        let top = self.remove_at(0);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_top_found();
        Ok(top.key())
    }

    /// Removes every entry. Capacity and ordering are kept.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.heap.clear();
        self.index.reset();
    }

    /// Iterates `(id, priority)` pairs in heap-array order.
    ///
    /// The first item is the top; beyond that only heap order holds.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.heap.iter().map(Entry::key)
    }

    /// Drains the heap into a vector, top first.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::{HeapOrder, IndexedHeap};
    ///
    /// let mut heap = IndexedHeap::new(3, HeapOrder::MinFirst);
    /// heap.insert(0, 3.0).unwrap();
    /// heap.insert(1, 1.0).unwrap();
    /// heap.insert(2, 2.0).unwrap();
    ///
    /// assert_eq!(heap.into_sorted_vec(), vec![(1, 1.0), (2, 2.0), (0, 3.0)]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<(usize, f64)> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while !self.heap.is_empty() {
            sorted.push(self.remove_at(0).key());
        }
        sorted
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.heap.capacity() * std::mem::size_of::<Entry>()
            + self.index.approx_bytes()
    }

    /// Validates heap order, index consistency and size accounting.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let capacity = self.capacity();
        if self.heap.len() > capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.heap.len(),
                capacity
            )));
        }
        if self.index.len() != self.heap.len() {
            return Err(InvariantError::new(format!(
                "index maps {} ids but heap holds {} entries",
                self.index.len(),
                self.heap.len()
            )));
        }

        for (slot, entry) in self.heap.iter().enumerate() {
            if entry.id >= capacity {
                return Err(InvariantError::new(format!(
                    "slot {} holds out-of-range id {}",
                    slot, entry.id
                )));
            }
            if self.index.get(entry.id) != Some(slot) {
                return Err(InvariantError::new(format!(
                    "id {} sits in slot {} but index says {:?}",
                    entry.id,
                    slot,
                    self.index.get(entry.id)
                )));
            }
            if slot > 0 {
                let parent = (slot - 1) / 2;
                if self.precedes(slot, parent) {
                    return Err(InvariantError::new(format!(
                        "heap order broken: slot {} {:?} above its child slot {} {:?}",
                        parent,
                        self.heap[parent].key(),
                        slot,
                        entry.key()
                    )));
                }
            }
        }

        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns a plain copy of the heap array and index for debugging.
    pub fn debug_snapshot(&self) -> IndexedHeapSnapshot {
        IndexedHeapSnapshot {
            ids: self.heap.iter().map(|entry| entry.id).collect(),
            priorities: self.heap.iter().map(|entry| entry.priority).collect(),
            positions: (0..self.capacity()).map(|id| self.index.get(id)).collect(),
        }
    }

    fn check_id(&self, id: usize) -> Result<(), HeapError> {
        if id >= self.capacity() {
            return Err(HeapError::InvalidId {
                id,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn check_vacant(&self, id: usize) -> Result<(), HeapError> {
        self.check_id(id)?;
        if self.index.contains(id) {
            return Err(HeapError::DuplicateId { id });
        }
        Ok(())
    }

    fn slot_of(&self, id: usize) -> Result<usize, HeapError> {
        self.check_id(id)?;
        self.index.get(id).ok_or(HeapError::NotFound { id })
    }

    /// Detaches the entry at `slot`, back-filling with the last entry.
    fn remove_at(&mut self, slot: usize) -> Entry {
        let removed = self.heap.swap_remove(slot);
        self.index.clear(removed.id);
        if slot < self.heap.len() {
            let moved = self.heap[slot].id;
            self.index.set(moved, slot);
            self.restore(slot);
        }
        removed
    }

    /// Re-heapifies around an entry whose priority or slot just changed.
    fn restore(&mut self, slot: usize) {
        if slot > 0 && self.precedes(slot, (slot - 1) / 2) {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    #[inline]
    fn precedes(&self, a: usize, b: usize) -> bool {
        self.order.precedes(self.heap[a].key(), self.heap[b].key())
    }

    /// Exchanges two slots and re-points both ids.
    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.index.set(self.heap[a].id, a);
        self.index.set(self.heap[b].id, b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.precedes(slot, parent) {
                break;
            }
            self.swap_slots(slot, parent);
            #[cfg(feature = "metrics")]
            self.metrics.record_sift_up_swap();
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.precedes(right, left) {
                right
            } else {
                left
            };
            if !self.precedes(child, slot) {
                break;
            }
            self.swap_slots(slot, child);
            #[cfg(feature = "metrics")]
            self.metrics.record_sift_down_swap();
            slot = child;
        }
    }
}

fn rejected(op: &'static str, err: HeapError) -> HeapError {
    debug!(op, id = err.id(), %err, "indexed heap operation rejected");
    err
}

#[cfg(feature = "metrics")]
impl IndexedHeap {
    pub fn metrics_snapshot(&self) -> IndexedHeapMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity())
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<IndexedHeapMetricsSnapshot> for IndexedHeap {
    fn snapshot(&self) -> IndexedHeapMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl MetricsReset for IndexedHeap {
    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(any(test, debug_assertions))]
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedHeapSnapshot {
    /// Ids in heap-array order.
    pub ids: Vec<usize>,
    /// Priorities in heap-array order.
    pub priorities: Vec<f64>,
    /// Slot per id, `None` when absent.
    pub positions: Vec<Option<usize>>,
}
