//! String hashing and the linear probe sequence.

/// Hashes `key` into `0..capacity`.
///
/// Folds each character's code point into a polynomial in `base`, reducing
/// modulo `capacity` at every step.
#[inline]
pub(crate) fn hash(key: &str, base: u64, capacity: usize) -> usize {
  debug_assert_ne!(capacity, 0, "hash into an empty table");

  let modulus: u128 = capacity as u128;
  let base: u128 = u128::from(base);

  let value: u128 = key.chars().fold(0, |value, ch| {
    (value * base + u128::from(u32::from(ch))) % modulus
  });

  // `value < capacity`, so this never truncates.
  value as usize
}

/// Returns the slot after `position`, wrapping at `capacity`.
#[inline]
pub(crate) const fn successor(position: usize, capacity: usize) -> usize {
  let next: usize = position + 1;

  if next == capacity { 0 } else { next }
}

/// Visits every slot once, starting at the home slot and moving forward.
#[derive(Clone, Debug)]
pub(crate) struct Probe {
  next: usize,
  capacity: usize,
  visited: usize,
}

impl Probe {
  #[inline]
  pub(crate) const fn new(start: usize, capacity: usize) -> Self {
    Self {
      next: start,
      capacity,
      visited: 0,
    }
  }

  /// The number of slots stepped past before the current one.
  #[inline]
  pub(crate) const fn steps(&self) -> usize {
    self.visited.saturating_sub(1)
  }
}

impl Iterator for Probe {
  type Item = usize;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.visited == self.capacity {
      return None;
    }

    let position: usize = self.next;

    self.next = successor(position, self.capacity);
    self.visited += 1;

    Some(position)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining: usize = self.capacity - self.visited;
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for Probe {}
