#![no_main]

use heapkit::{HeapError, HeapOrder, IndexedHeap};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on IndexedHeap
//
// First byte picks capacity and ordering; then 3-byte chunks of
// (op, id, priority). Ids deliberately overshoot capacity.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let order = HeapOrder::from_min_first(data[0] & 0x80 == 0);
    let mut heap = IndexedHeap::new(capacity, order);

    for chunk in data[1..].chunks(3) {
        if chunk.len() < 3 {
            break;
        }

        let op = chunk[0] % 7;
        let id = usize::from(chunk[1] % 40);
        let priority = f64::from(chunk[2] as i8);
        let old_len = heap.len();

        match op {
            0 => {
                // insert
                let was_live = heap.contains(id);
                match heap.insert(id, priority) {
                    Ok(()) => {
                        assert_eq!(heap.len(), old_len + 1);
                        assert_eq!(heap.priority(id), Ok(priority));
                    }
                    Err(HeapError::DuplicateId { id: dup }) => {
                        assert!(was_live);
                        assert_eq!(dup, id);
                        assert_eq!(heap.len(), old_len);
                    }
                    Err(HeapError::InvalidId { .. }) => assert!(id >= capacity),
                    Err(err) => panic!("unexpected insert error {err}"),
                }
            }
            1 => {
                // change_priority
                let previous = heap.priority(id);
                assert_eq!(heap.change_priority(id, priority), previous);
                if previous.is_ok() {
                    assert_eq!(heap.priority(id), Ok(priority));
                }
                assert_eq!(heap.len(), old_len);
            }
            2 => {
                // remove
                let previous = heap.priority(id);
                assert_eq!(heap.remove(id), previous);
                if previous.is_ok() {
                    assert_eq!(heap.len(), old_len - 1);
                    assert!(!heap.contains(id));
                }
            }
            3 => {
                // pop_top
                let peeked = heap.peek_top();
                assert_eq!(heap.pop_top(), peeked);
                match peeked {
                    Ok((top, _)) => {
                        assert_eq!(heap.len(), old_len - 1);
                        assert!(!heap.contains(top));
                    }
                    Err(err) => {
                        assert_eq!(err, HeapError::Empty);
                        assert!(heap.is_empty());
                    }
                }
            }
            4 => {
                // peek_top (read-only)
                let _ = heap.peek_top();
                assert_eq!(heap.len(), old_len);
            }
            5 => {
                // priority (read-only)
                let _ = heap.priority(id);
                assert_eq!(heap.len(), old_len);
            }
            6 => {
                // clear
                heap.clear();
                assert!(heap.is_empty());
                assert_eq!(heap.capacity(), capacity);
            }
            _ => unreachable!(),
        }

        assert!(heap.len() <= heap.capacity());
        heap.check_invariants().unwrap();
    }
});
