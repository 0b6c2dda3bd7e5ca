//! Brute-force O(n) reference queue used as a test oracle.
//!
//! No index, no heap: a flat `Option<f64>` per id and a linear scan in id
//! order for the top. Ties therefore resolve to the lowest id, which is the
//! same tie-break `HeapOrder::precedes` gives the real heap.

use heapkit::{HeapError, HeapOrder, IndexedPriorityQueue};

#[derive(Debug, Clone)]
pub struct ReferenceQueue {
    entries: Vec<Option<f64>>,
    order: HeapOrder,
}

impl ReferenceQueue {
    pub fn new(capacity: usize, order: HeapOrder) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            entries: vec![None; capacity],
            order,
        }
    }

    fn slot(&self, id: usize) -> Result<&Option<f64>, HeapError> {
        self.entries.get(id).ok_or(HeapError::InvalidId {
            id,
            capacity: self.entries.len(),
        })
    }

    fn live_mut(&mut self, id: usize) -> Result<&mut f64, HeapError> {
        let capacity = self.entries.len();
        self.entries
            .get_mut(id)
            .ok_or(HeapError::InvalidId { id, capacity })?
            .as_mut()
            .ok_or(HeapError::NotFound { id })
    }

    fn top(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (id, entry) in self.entries.iter().enumerate() {
            if let Some(p) = *entry {
                match best {
                    Some(current) if !self.order.precedes((id, p), current) => {},
                    _ => best = Some((id, p)),
                }
            }
        }
        best
    }
}

impl IndexedPriorityQueue for ReferenceQueue {
    fn capacity(&self) -> usize {
        self.entries.len()
    }

    fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    fn contains(&self, id: usize) -> bool {
        matches!(self.entries.get(id), Some(Some(_)))
    }

    fn insert(&mut self, id: usize, priority: f64) -> Result<(), HeapError> {
        if self.slot(id)?.is_some() {
            return Err(HeapError::DuplicateId { id });
        }
        self.entries[id] = Some(priority);
        Ok(())
    }

    fn change_priority(&mut self, id: usize, priority: f64) -> Result<f64, HeapError> {
        let entry = self.live_mut(id)?;
        Ok(std::mem::replace(entry, priority))
    }

    fn remove(&mut self, id: usize) -> Result<f64, HeapError> {
        let previous = *self.live_mut(id)?;
        self.entries[id] = None;
        Ok(previous)
    }

    fn priority(&self, id: usize) -> Result<f64, HeapError> {
        self.slot(id)?.ok_or(HeapError::NotFound { id })
    }

    fn peek_top(&self) -> Result<(usize, f64), HeapError> {
        self.top().ok_or(HeapError::Empty)
    }

    fn pop_top(&mut self) -> Result<(usize, f64), HeapError> {
        let (id, priority) = self.top().ok_or(HeapError::Empty)?;
        self.entries[id] = None;
        Ok((id, priority))
    }
}
