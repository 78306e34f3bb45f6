//! Probe diagnostics.

use core::cell::Cell;

/// A snapshot of a table's probe counters.
///
/// Every counter only ever increases; it is reset by constructing a new table.
///
/// # Examples
///
/// ```
/// use lptab::{LpTab, Stats};
///
/// let mut table: LpTab<u32> = LpTab::with_base(31, 7);
///
/// table.set("a", 1).unwrap();
/// table.set("h", 2).unwrap(); // "a" and "h" share a home slot
///
/// let stats: Stats = table.stats();
///
/// assert_eq!(stats.collisions, 1);
/// assert_eq!(stats.probe_max, 1);
/// assert_eq!(stats.rehashes, 0);
/// ```
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub struct Stats {
  /// Inserts whose home slot was already taken by another key.
  pub collisions: u64,
  /// Occupied slots stepped past by any probe, lookups included.
  pub probes: u64,
  /// The longest run stepped past by a single insert.
  pub probe_max: usize,
  /// Times the table has grown.
  pub rehashes: u64,
}

/// Interior-mutable counters, updated from `&self` lookups.
#[derive(Debug, Default)]
pub(crate) struct Counters {
  collisions: Cell<u64>,
  probes: Cell<u64>,
  probe_max: Cell<usize>,
  rehashes: Cell<u64>,
}

impl Counters {
  #[inline]
  pub(crate) fn record_step(&self) {
    self.probes.set(self.probes.get() + 1);
  }

  /// Records an insert that landed on a vacant slot after `steps` steps.
  #[inline]
  pub(crate) fn record_insert(&self, steps: usize) {
    if steps > 0 {
      self.collisions.set(self.collisions.get() + 1);
    }

    if steps > self.probe_max.get() {
      self.probe_max.set(steps);
    }
  }

  #[inline]
  pub(crate) fn record_rehash(&self) {
    self.rehashes.set(self.rehashes.get() + 1);
  }

  #[inline]
  pub(crate) fn snapshot(&self) -> Stats {
    Stats {
      collisions: self.collisions.get(),
      probes: self.probes.get(),
      probe_max: self.probe_max.get(),
      rehashes: self.rehashes.get(),
    }
  }
}
