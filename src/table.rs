//! Core table implementation.
//!
//! Open addressing over a single [`Array`] of `(key, value)` slots with linear
//! probing. Deletion repairs the remainder of the cluster by reinserting it;
//! growth rebuilds the table at the next [`Capacity`] in the schedule.

use core::fmt::Debug;
use core::fmt::DebugMap;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;

use log::debug;
use log::trace;
use log::warn;

use crate::array::Array;
use crate::error::Error;
use crate::error::Result;
use crate::iter::Entries;
use crate::params::Capacity;
use crate::probe;
use crate::probe::Probe;
use crate::stats::Counters;
use crate::stats::Stats;

/// The outcome of a successful probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
  /// The key is stored at this position.
  Occupied(usize),
  /// The key is absent; this is where it would be inserted.
  Vacant(usize),
}

// -----------------------------------------------------------------------------
// Table State
// -----------------------------------------------------------------------------

pub(crate) struct Table<V> {
  slots: Array<(String, V)>,
  count: usize,
  capacity: Capacity,
  hash_base: u64,
  counters: Counters,
}

impl<V> Table<V> {
  #[inline]
  pub(crate) fn new(hash_base: u64, capacity: Capacity) -> Self {
    Self {
      slots: Array::new(capacity),
      count: 0,
      capacity,
      hash_base,
      counters: Counters::default(),
    }
  }

  #[inline]
  pub(crate) const fn cap(&self) -> usize {
    self.capacity.as_usize()
  }

  #[inline]
  pub(crate) const fn capacity(&self) -> Capacity {
    self.capacity
  }

  #[inline]
  pub(crate) const fn hash_base(&self) -> u64 {
    self.hash_base
  }

  #[inline]
  pub(crate) const fn len(&self) -> usize {
    self.count
  }

  #[inline]
  pub(crate) const fn is_empty(&self) -> bool {
    self.count == 0
  }

  #[inline]
  pub(crate) const fn is_full(&self) -> bool {
    self.count == self.cap()
  }

  #[inline]
  pub(crate) fn stats(&self) -> Stats {
    self.counters.snapshot()
  }

  #[inline]
  pub(crate) fn entries(&self) -> Entries<'_, V> {
    Entries::new(self.slots.as_slice(), self.count)
  }

  #[inline]
  pub(crate) fn hash(&self, key: &str) -> usize {
    probe::hash(key, self.hash_base, self.cap())
  }

  /// Returns the position of `key`, or `None` if it is absent.
  #[inline]
  pub(crate) fn find(&self, key: &str) -> Option<usize> {
    match self.walk(key) {
      Some((Slot::Occupied(position), _)) => Some(position),
      Some((Slot::Vacant(_), _)) | None => None,
    }
  }

  /// Returns the position of `key`, or [`Error::KeyNotFound`].
  #[inline]
  pub(crate) fn locate(&self, key: &str) -> Result<usize> {
    self.find(key).ok_or_else(|| Error::key_not_found(key))
  }

  #[inline]
  pub(crate) fn lookup(&self, key: &str) -> Option<&V> {
    let position: usize = self.find(key)?;
    self.slots.get(position).map(|(_, value)| value)
  }

  #[inline]
  pub(crate) fn lookup_mut(&mut self, key: &str) -> Option<&mut V> {
    let position: usize = self.find(key)?;
    self.slots.get_mut(position).map(|(_, value)| value)
  }

  #[inline]
  pub(crate) fn get(&self, key: &str) -> Result<&V> {
    self.lookup(key).ok_or_else(|| Error::key_not_found(key))
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, key: &str) -> Result<&mut V> {
    self.lookup_mut(key).ok_or_else(|| Error::key_not_found(key))
  }

  /// Inserts or updates `key`, returning the value it replaced.
  ///
  /// Growth is decided on the count before this insert, so a table can end up
  /// one entry past half full until the next `set`.
  pub(crate) fn set(&mut self, key: String, value: V) -> Result<Option<V>> {
    if self.over_threshold() {
      self.rehash()?;
    }

    self.place(key, value)
  }

  /// Removes `key` and returns its value, repairing the rest of its cluster.
  pub(crate) fn remove(&mut self, key: &str) -> Result<V> {
    let position: usize = self.locate(key)?;

    let Some((_, value)) = self.slots.take(position) else {
      return Err(Error::key_not_found(key));
    };

    self.count -= 1;

    let mut cursor: usize = probe::successor(position, self.cap());

    // Everything up to the next vacancy may have probed through `position`.
    while let Some((moved, entry)) = self.slots.take(cursor) {
      self.count -= 1;

      trace!("repair cluster: reinsert {moved:?} from slot {cursor}");

      self.place(moved, entry)?;

      cursor = probe::successor(cursor, self.cap());
    }

    Ok(value)
  }

  /// Inserts without considering growth.
  fn place(&mut self, key: String, value: V) -> Result<Option<V>> {
    match self.probe_insert(&key)? {
      Slot::Occupied(position) => {
        let entry: Option<(String, V)> = self.slots.put(position, (key, value));
        Ok(entry.map(|(_, value)| value))
      }
      Slot::Vacant(position) => {
        self.slots.put(position, (key, value));
        self.count += 1;
        Ok(None)
      }
    }
  }

  /// Finds where `key` would be inserted, recording the probe run.
  pub(crate) fn probe_insert(&self, key: &str) -> Result<Slot> {
    let full: Error = Error::TableFull {
      capacity: self.cap(),
    };

    if self.is_full() {
      return Err(full);
    }

    match self.walk(key) {
      Some((Slot::Vacant(position), steps)) => {
        self.counters.record_insert(steps);
        Ok(Slot::Vacant(position))
      }
      Some((slot, _)) => Ok(slot),
      None => Err(full),
    }
  }

  /// Walks forward from the home slot of `key` to the key or the first
  /// vacancy, returning the slot and the number of slots stepped past.
  ///
  /// Returns `None` only if every slot holds some other key.
  fn walk(&self, key: &str) -> Option<(Slot, usize)> {
    let mut probe: Probe = Probe::new(self.hash(key), self.cap());

    while let Some(position) = probe.next() {
      match self.slots.get(position) {
        None => return Some((Slot::Vacant(position), probe.steps())),
        Some((stored, _)) if stored == key => return Some((Slot::Occupied(position), probe.steps())),
        Some(_) => self.counters.record_step(),
      }
    }

    None
  }

  #[inline]
  const fn over_threshold(&self) -> bool {
    self.count * 2 > self.cap()
  }

  /// Rebuilds the table at the next capacity in the schedule.
  fn rehash(&mut self) -> Result<()> {
    let Some(capacity) = self.capacity.next() else {
      warn!(
        "growth schedule exhausted at {} slots; table will fill in place",
        self.cap(),
      );

      return Ok(());
    };

    debug!(
      "rehash: {} -> {} slots ({} entries)",
      self.cap(),
      capacity.as_usize(),
      self.count,
    );

    let mut grown: Table<V> = Table::new(self.hash_base, capacity);

    for (key, value) in self.slots.drain() {
      grown.place(key, value)?;
    }

    self.slots = grown.slots;
    self.count = grown.count;
    self.capacity = capacity;
    self.counters.record_rehash();

    Ok(())
  }
}

impl<V> Debug for Table<V>
where
  V: Debug,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let mut debug: DebugMap<'_, '_> = f.debug_map();

    for (key, value) in self.entries() {
      debug.entry(&key, value);
    }

    debug.finish()
  }
}
