use std::cell::Cell;

/// A metrics-only counter that can be bumped through `&self`.
///
/// Used by read-only heap operations (`peek_top`, `priority`). `Cell` keeps
/// the heap `Send`, so it can still live behind an external `Mutex`.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}

impl Clone for MetricsCell {
    fn clone(&self) -> Self {
        Self(Cell::new(self.get()))
    }
}
