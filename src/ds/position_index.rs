/// Fixed-size `id -> slot` table backing [`IndexedHeap`](super::IndexedHeap).
///
/// Slots are plain integers into the heap array, never references, so a swap
/// or reallocation of the heap array cannot leave a dangling entry behind.
/// Callers must keep ids below [`capacity`](Self::capacity); the heap checks
/// range before it touches the index.
#[derive(Debug, Clone)]
pub struct PositionIndex {
    slots: Vec<Option<usize>>,
    len: usize,
}

impl PositionIndex {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            len: 0,
        }
    }

    #[inline]
    pub fn get(&self, id: usize) -> Option<usize> {
        self.slots.get(id).copied().flatten()
    }

    /// Points `id` at `slot`, returning the slot it previously held.
    #[inline]
    pub fn set(&mut self, id: usize, slot: usize) -> Option<usize> {
        let previous = self.slots[id].replace(slot);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Marks `id` absent, returning the slot it held.
    #[inline]
    pub fn clear(&mut self, id: usize) -> Option<usize> {
        let previous = self.slots.get_mut(id)?.take();
        if previous.is_some() {
            self.len -= 1;
        }
        previous
    }

    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.get(id).is_some()
    }

    /// Number of ids currently mapped to a slot.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Marks every id absent without releasing storage.
    pub fn reset(&mut self) {
        self.slots.fill(None);
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.map(|slot| (id, slot)))
    }

    pub fn approx_bytes(&self) -> usize {
        self.slots.capacity() * std::mem::size_of::<Option<usize>>()
    }
}
