//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod reference;

use heapkit::{HeapOrder, IndexedHeap, IndexedPriorityQueue};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub use reference::ReferenceQueue;

/// A shuffled permutation of `0..n` and `n` pairwise-distinct priorities.
///
/// Priority `i` is `rand(0..100) + i / n`, so no two are equal and the
/// expected top is unique for every operation.
pub fn gen_pairs(n: usize, seed: u64) -> (Vec<usize>, Vec<f64>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let priorities = (0..n)
        .map(|i| f64::from(rng.random_range(0..100u32)) + i as f64 / n as f64)
        .collect();
    let mut ids: Vec<usize> = (0..n).collect();
    ids.shuffle(&mut rng);
    (ids, priorities)
}

/// Builds a heap and a reference queue holding the same `(ids[i], p[i])` pairs.
pub fn init_queues(
    ids: &[usize],
    priorities: &[f64],
    capacity: usize,
    order: HeapOrder,
) -> (IndexedHeap, ReferenceQueue) {
    let mut heap = IndexedHeap::new(capacity, order);
    let mut reference = ReferenceQueue::new(capacity, order);
    for (&id, &p) in ids.iter().zip(priorities) {
        heap.insert(id, p).unwrap();
        reference.insert(id, p).unwrap();
    }
    (heap, reference)
}

/// Shifts every live priority by a whole number in `(-1000, 1000)` on both
/// queues. Whole-number deltas keep `gen_pairs` priorities distinct.
pub fn change_priorities(heap: &mut IndexedHeap, reference: &mut ReferenceQueue, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    assert_eq!(heap.len(), reference.len(), "size mismatch before change");

    for id in 0..heap.capacity() {
        let Ok(expected) = reference.priority(id) else {
            assert!(!heap.contains(id), "id {id} only present in heap");
            continue;
        };
        assert_eq!(heap.priority(id), Ok(expected), "priority mismatch for id {id}");

        let mut delta = f64::from(rng.random_range(0..1000u32));
        if rng.random::<bool>() {
            delta = -delta;
        }
        let updated = expected + delta;
        assert_eq!(reference.change_priority(id, updated), Ok(expected));
        assert_eq!(heap.change_priority(id, updated), Ok(expected));
    }
}

/// Pops both queues to empty, asserting identical `(id, priority)` sequences.
pub fn empty_and_check(heap: &mut IndexedHeap, reference: &mut ReferenceQueue) {
    assert_eq!(heap.len(), reference.len(), "size mismatch before drain");
    while !reference.is_empty() {
        let expected = reference.pop_top();
        let actual = heap.pop_top();
        assert_eq!(actual, expected);
        heap.check_invariants().unwrap();
    }
    assert!(heap.is_empty());
}
