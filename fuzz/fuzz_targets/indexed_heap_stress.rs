#![no_main]

use heapkit::{HeapOrder, IndexedHeap};
use libfuzzer_sys::fuzz_target;

const CAPACITY: usize = 256;

// Fuzz stress test with a flat-array reference
//
// Every id maps to `Option<priority>` in the reference; the expected top is
// found by a linear scan using the same tie-break as the heap.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let order = HeapOrder::from_min_first(data[0] & 1 == 0);
    let mut heap = IndexedHeap::new(CAPACITY, order);
    let mut reference: Vec<Option<f64>> = vec![None; CAPACITY];

    for chunk in data[1..].chunks(3) {
        if chunk.len() < 3 {
            break;
        }

        let id = usize::from(chunk[1]);
        let priority = f64::from(chunk[2] % 16);

        match chunk[0] % 4 {
            0 => {
                let inserted = heap.insert(id, priority).is_ok();
                assert_eq!(inserted, reference[id].is_none());
                if inserted {
                    reference[id] = Some(priority);
                }
            }
            1 => {
                let changed = heap.change_priority(id, priority).is_ok();
                assert_eq!(changed, reference[id].is_some());
                if changed {
                    reference[id] = Some(priority);
                }
            }
            2 => {
                assert_eq!(heap.remove(id).ok(), reference[id].take());
            }
            3 => {
                let expected = top(order, &reference);
                assert_eq!(heap.pop_top().ok(), expected);
                if let Some((top_id, _)) = expected {
                    reference[top_id] = None;
                }
            }
            _ => unreachable!(),
        }

        assert_eq!(heap.peek_top().ok(), top(order, &reference));
        assert_eq!(heap.len(), reference.iter().flatten().count());
    }
});

fn top(order: HeapOrder, reference: &[Option<f64>]) -> Option<(usize, f64)> {
    reference
        .iter()
        .enumerate()
        .filter_map(|(id, p)| p.map(|p| (id, p)))
        .reduce(|best, next| if order.precedes(next, best) { next } else { best })
}
