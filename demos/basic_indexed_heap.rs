use heapkit::{HeapError, HeapOrder, IndexedHeap};
use tracing_subscriber::EnvFilter;

fn show(label: &str, heap: &IndexedHeap) {
    let priorities: Vec<f64> = heap.iter().map(|(_, p)| p).collect();
    let ids: Vec<usize> = heap.iter().map(|(id, _)| id).collect();
    println!("{label}");
    println!("  priorities: {priorities:?}");
    println!("  ids:        {ids:?}");
}

fn main() -> Result<(), HeapError> {
    // RUST_LOG=heapkit=debug shows rejected operations
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut heap = IndexedHeap::try_new(15, HeapOrder::MinFirst)?;
    let priorities = [7.0, 11.0, 50.0, 12.0, 33.0, 51.0, 55.0, 21.0, 55.0, 80.0, 34.0];
    for (id, &p) in priorities.iter().enumerate() {
        heap.insert(id, p)?;
    }
    heap.insert(11, 25.0)?;
    show("after inserts", &heap);

    heap.change_priority(11, 90.0)?;
    heap.change_priority(11, 25.0)?;
    heap.change_priority(0, 90.0)?;
    show("after priority changes", &heap);

    heap.remove(5)?;
    heap.remove(1)?;
    show("after removing ids 5 and 1", &heap);

    let (id, p) = heap.pop_top()?;
    println!("popped id {id} with priority {p}");
    show("after pop", &heap);

    // misuse is reported, never panics
    if let Err(err) = heap.insert(4, 1.0) {
        println!("insert(4) rejected: {err}");
    }
    if let Err(err) = heap.priority(99) {
        println!("priority(99) rejected: {err}");
    }

    Ok(())
}

// Expected output:
// after inserts
//   priorities: [7.0, 11.0, 25.0, 12.0, 33.0, 50.0, 55.0, 21.0, 55.0, 80.0, 34.0, 51.0]
//   ids:        [0, 1, 11, 3, 4, 2, 6, 7, 8, 9, 10, 5]
// after priority changes
//   priorities: [11.0, 12.0, 25.0, 21.0, 33.0, 50.0, 55.0, 90.0, 55.0, 80.0, 34.0, 51.0]
//   ids:        [1, 3, 11, 7, 4, 2, 6, 0, 8, 9, 10, 5]
// after removing ids 5 and 1
//   priorities: [12.0, 21.0, 25.0, 34.0, 33.0, 50.0, 55.0, 90.0, 55.0, 80.0]
//   ids:        [3, 7, 11, 10, 4, 2, 6, 0, 8, 9]
// popped id 3 with priority 12
// after pop
//   priorities: [21.0, 33.0, 25.0, 34.0, 80.0, 50.0, 55.0, 90.0, 55.0]
//   ids:        [7, 4, 11, 10, 9, 2, 6, 0, 8]
// insert(4) rejected: id 4 already has an entry
// priority(99) rejected: id 99 is out of range for capacity 15
