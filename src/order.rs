//! Ordering mode for [`IndexedHeap`](crate::ds::IndexedHeap).
//!
//! The mode is fixed at construction. Every sift decision in the heap goes
//! through [`HeapOrder::precedes`], which makes the ordering total:
//!
//! - priorities compare with [`f64::total_cmp`], so NaN sorts after `+inf`
//!   and `-0.0` sorts before `+0.0`;
//! - equal priorities are broken by id, the lower id being closer to the top
//!   in both modes.
//!
//! With a total order the top of a heap is a pure function of its contents:
//! the lowest id among the entries holding the most extreme priority.
//!
//! ```
//! use heapkit::HeapOrder;
//!
//! assert!(HeapOrder::MinFirst.precedes((4, 1.0), (0, 2.0)));
//! assert!(HeapOrder::MaxFirst.precedes((4, 2.0), (0, 1.0)));
//!
//! // ties go to the lower id
//! assert!(HeapOrder::MaxFirst.precedes((0, 5.0), (1, 5.0)));
//! ```

use std::cmp::Ordering;

/// Which end of the priority range sits at the top of the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrder {
    /// Smaller priorities come out first.
    #[default]
    MinFirst,
    /// Larger priorities come out first.
    MaxFirst,
}

impl HeapOrder {
    /// Maps the classic `min_first` flag onto an ordering mode.
    #[inline]
    pub fn from_min_first(min_first: bool) -> Self {
        if min_first {
            HeapOrder::MinFirst
        } else {
            HeapOrder::MaxFirst
        }
    }

    #[inline]
    pub fn is_min_first(self) -> bool {
        self == HeapOrder::MinFirst
    }

    /// Compares two priorities; `Less` means `a` belongs nearer the top.
    #[inline]
    pub fn cmp_priority(self, a: f64, b: f64) -> Ordering {
        match self {
            HeapOrder::MinFirst => a.total_cmp(&b),
            HeapOrder::MaxFirst => b.total_cmp(&a),
        }
    }

    /// Returns `true` if entry `a` must sit strictly above entry `b`.
    ///
    /// Entries are `(id, priority)` pairs. Distinct ids never compare equal,
    /// so exactly one of `precedes(a, b)` and `precedes(b, a)` holds.
    #[inline]
    pub fn precedes(self, a: (usize, f64), b: (usize, f64)) -> bool {
        match self.cmp_priority(a.1, b.1) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => a.0 < b.0,
        }
    }
}
