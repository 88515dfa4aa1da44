use std::cell::Cell;

/// Counter for `&self` recording paths (e.g. `peek`).
///
/// Not `Sync`: the cache core that owns it is only shared through the
/// handle's mutex, which already serializes every access.
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
}
