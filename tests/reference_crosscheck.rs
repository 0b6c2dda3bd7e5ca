// ==============================================
// REFERENCE CROSS-CHECK TESTS (integration)
// ==============================================
//
// Drives `IndexedHeap` and the brute-force `ReferenceQueue` with the same
// calls and requires identical results. Both resolve priority ties to the
// lowest id, so even tied workloads must match exactly.

mod common;

use common::{ReferenceQueue, change_priorities, empty_and_check, gen_pairs, init_queues};
use heapkit::{HeapOrder, IndexedHeap, IndexedPriorityQueue};

const ORDERS: [HeapOrder; 2] = [HeapOrder::MinFirst, HeapOrder::MaxFirst];

mod seeded {
    use super::*;

    #[test]
    fn insert_then_drain_matches_reference() {
        for order in ORDERS {
            for (n, seed) in [(1, 1), (7, 2), (64, 3), (500, 4)] {
                let (ids, priorities) = gen_pairs(n, seed);
                let (mut heap, mut reference) = init_queues(&ids, &priorities, n, order);
                empty_and_check(&mut heap, &mut reference);
            }
        }
    }

    #[test]
    fn partial_fill_then_drain_matches_reference() {
        for order in ORDERS {
            let (ids, priorities) = gen_pairs(100, 11);
            let (mut heap, mut reference) = init_queues(&ids[..40], &priorities[..40], 100, order);
            assert_eq!(heap.len(), 40);
            empty_and_check(&mut heap, &mut reference);
        }
    }

    #[test]
    fn change_priorities_then_drain_matches_reference() {
        for order in ORDERS {
            for seed in 0..5 {
                let (ids, priorities) = gen_pairs(200, seed);
                let (mut heap, mut reference) = init_queues(&ids, &priorities, 200, order);
                change_priorities(&mut heap, &mut reference, seed + 100);
                heap.check_invariants().unwrap();
                change_priorities(&mut heap, &mut reference, seed + 200);
                empty_and_check(&mut heap, &mut reference);
            }
        }
    }

    #[test]
    fn remove_every_third_then_drain_matches_reference() {
        for order in ORDERS {
            let (ids, priorities) = gen_pairs(90, 7);
            let (mut heap, mut reference) = init_queues(&ids, &priorities, 90, order);
            for id in (0..90).step_by(3) {
                assert_eq!(heap.remove(id), reference.remove(id));
                heap.check_invariants().unwrap();
            }
            assert_eq!(heap.len(), 60);
            empty_and_check(&mut heap, &mut reference);
        }
    }

    #[test]
    fn interleaved_pops_and_reinserts_match_reference() {
        for order in ORDERS {
            let (ids, priorities) = gen_pairs(50, 21);
            let (mut heap, mut reference) = init_queues(&ids, &priorities, 50, order);
            for round in 0..25 {
                let popped = heap.pop_top();
                assert_eq!(popped, reference.pop_top());
                let (id, p) = popped.unwrap();
                if round % 2 == 0 {
                    let shifted = p + f64::from(round) * 3.0;
                    heap.insert(id, shifted).unwrap();
                    reference.insert(id, shifted).unwrap();
                }
                assert_eq!(heap.peek_top(), reference.peek_top());
            }
            empty_and_check(&mut heap, &mut reference);
        }
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    const CAPACITY: usize = 12;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(usize, i8),
        Change(usize, i8),
        Remove(usize),
        Priority(usize),
        Peek,
        Pop,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        // ids run past capacity to exercise InvalidId; small priorities force ties
        let id = 0..CAPACITY + 3;
        prop_oneof![
            3 => (id.clone(), any::<i8>()).prop_map(|(id, p)| Op::Insert(id, p % 8)),
            2 => (id.clone(), any::<i8>()).prop_map(|(id, p)| Op::Change(id, p % 8)),
            2 => id.clone().prop_map(Op::Remove),
            1 => id.prop_map(Op::Priority),
            1 => Just(Op::Peek),
            2 => Just(Op::Pop),
        ]
    }

    fn apply<Q: IndexedPriorityQueue>(queue: &mut Q, op: &Op) -> String {
        match *op {
            Op::Insert(id, p) => format!("{:?}", queue.insert(id, f64::from(p))),
            Op::Change(id, p) => format!("{:?}", queue.change_priority(id, f64::from(p))),
            Op::Remove(id) => format!("{:?}", queue.remove(id)),
            Op::Priority(id) => format!("{:?}", queue.priority(id)),
            Op::Peek => format!("{:?}", queue.peek_top()),
            Op::Pop => format!("{:?}", queue.pop_top()),
        }
    }

    proptest! {
        /// Property: every call returns exactly what the reference returns
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_reference_queue(
            max_first in any::<bool>(),
            ops in prop::collection::vec(op_strategy(), 0..300)
        ) {
            let order = HeapOrder::from_min_first(!max_first);
            let mut heap = IndexedHeap::new(CAPACITY, order);
            let mut reference = ReferenceQueue::new(CAPACITY, order);

            for op in &ops {
                prop_assert_eq!(apply(&mut heap, op), apply(&mut reference, op), "op {:?}", op);
                prop_assert_eq!(heap.len(), reference.len());
                prop_assert!(heap.check_invariants().is_ok());
            }

            prop_assert_eq!(heap.pop_top_batch(CAPACITY), reference.pop_top_batch(CAPACITY));
        }

        /// Property: insert followed by remove restores size and membership
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_insert_remove_round_trip(
            seed in any::<u64>(),
            id in 0..CAPACITY,
            p in -100.0f64..100.0
        ) {
            let (ids, priorities) = gen_pairs(CAPACITY, seed);
            let (mut heap, _) = init_queues(&ids[..CAPACITY / 2], &priorities, CAPACITY, HeapOrder::MinFirst);
            let before: Vec<bool> = (0..CAPACITY).map(|i| heap.contains(i)).collect();
            let len = heap.len();

            if heap.insert(id, p).is_ok() {
                prop_assert_eq!(heap.remove(id), Ok(p));
            }

            prop_assert_eq!(heap.len(), len);
            let after: Vec<bool> = (0..CAPACITY).map(|i| heap.contains(i)).collect();
            prop_assert_eq!(after, before);
            prop_assert!(heap.check_invariants().is_ok());
        }
    }
}
