//! DHAT heap profiler for heapkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>
//!
//! Every workload should show exactly two long-lived blocks per heap (entry
//! array and position index); anything else is an allocation on a hot path.

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use heapkit::{HeapOrder, IndexedHeap, IndexedPriorityQueue};

/// XorShift64 for deterministic priorities without pulling rand into the bin.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }

    fn next_id(&mut self, capacity: usize) -> usize {
        (self.next_u64() % capacity as u64) as usize
    }
}

fn fill(heap: &mut IndexedHeap, rng: &mut XorShift64) {
    for id in 0..heap.capacity() {
        let _ = heap.insert(id, rng.next_f64() * 1000.0);
    }
}

/// Scheduler-style churn: pop the top, push it back with a later deadline.
fn pop_reinsert_workload(heap: &mut IndexedHeap, operations: usize, seed: u64) {
    let mut rng = XorShift64::new(seed);
    for _ in 0..operations {
        if let Ok((id, priority)) = heap.pop_top() {
            let _ = heap.insert(id, priority + rng.next_f64() * 100.0);
        }
    }
}

/// Dijkstra-style relaxation: random decrease/increase of live keys.
fn change_priority_workload(heap: &mut IndexedHeap, operations: usize, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let capacity = heap.capacity();
    for _ in 0..operations {
        let id = rng.next_id(capacity);
        let _ = heap.change_priority(id, rng.next_f64() * 1000.0);
    }
}

/// Arbitrary removal followed by reinsertion of the same id.
fn remove_reinsert_workload(heap: &mut IndexedHeap, operations: usize, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let capacity = heap.capacity();
    for _ in 0..operations {
        let id = rng.next_id(capacity);
        if heap.remove(id).is_ok() {
            let _ = heap.insert(id, rng.next_f64() * 1000.0);
        }
    }
}

fn profile(order: HeapOrder) {
    println!("=== Profiling {order:?} ===");
    let capacity = 16_384;
    let operations = 200_000;

    let mut rng = XorShift64::new(42);
    let mut heap = IndexedHeap::new(capacity, order);
    fill(&mut heap, &mut rng);

    pop_reinsert_workload(&mut heap, operations, 7);
    change_priority_workload(&mut heap, operations, 11);
    remove_reinsert_workload(&mut heap, operations, 13);

    let drained = heap.pop_top_batch(capacity / 2);

    println!("  Drained: {}", drained.len());
    println!("  Final size: {}", heap.len());
    println!("  Approx bytes: {}", heap.approx_bytes());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("HeapKit DHAT Heap Profiling");
    println!("===========================\n");

    profile(HeapOrder::MinFirst);
    profile(HeapOrder::MaxFirst);

    println!("\n===========================");
    println!("Profile written to dhat-heap.json");
}
