//! Fixed-Size Ring of Recent Computed Readings
//!
//! The display layer wants "current reading plus how we got here": the
//! latest feels-like value, when it arrived, and a short trail for trends.
//! A const-generic ring buffer covers that without allocation - when full,
//! the oldest entry is overwritten, because a stale reading is the least
//! valuable thing we hold.
//!
//! Invariants:
//! - `write_pos < N` and `len <= N`
//! - iteration yields entries oldest to newest
//!
//! Not thread-safe; the monitor owns it and consumers see snapshots via
//! [`History::last`] or [`History::iter`].

use crate::events::ApparentReading;

/// Overwrite-oldest ring buffer of computed readings
///
/// `N` is the capacity, fixed at compile time. Powers of two let the
/// wrap-around modulo compile to a mask, but any size works.
#[derive(Debug, Clone)]
pub struct History<const N: usize> {
    entries: [Option<ApparentReading>; N],
    write_pos: usize,
    len: usize,
}

impl<const N: usize> History<N> {
    /// Create an empty history
    pub const fn new() -> Self {
        Self {
            entries: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Record a reading, overwriting the oldest if full
    pub fn push(&mut self, reading: ApparentReading) {
        self.entries[self.write_pos] = Some(reading);
        self.write_pos = (self.write_pos + 1) % N;
        if self.len < N {
            self.len += 1;
        }
    }

    /// Most recently recorded reading, if any
    pub fn last(&self) -> Option<&ApparentReading> {
        if self.len == 0 {
            return None;
        }
        let idx = (self.write_pos + N - 1) % N;
        self.entries[idx].as_ref()
    }

    /// Number of readings currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no readings have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &ApparentReading> {
        let start = if self.len < N { 0 } else { self.write_pos };
        (0..self.len).filter_map(move |i| self.entries[(start + i) % N].as_ref())
    }

    /// Drop all readings
    pub fn clear(&mut self) {
        self.entries = [None; N];
        self.write_pos = 0;
        self.len = 0;
    }
}

impl<const N: usize> Default for History<N> {
    fn default() -> Self {
        Self::new()
    }
}
