//! Borrowing iteration over occupied slots.

use core::fmt::Debug;
use core::fmt::Formatter;
use core::fmt::Result;
use core::iter::FusedIterator;
use core::slice;

/// An iterator over the entries of a [`LpTab`], in slot order.
///
/// Created by [`LpTab::entries`]. The order is unspecified and changes when
/// the table grows or a deletion relocates entries. Calling `entries` again
/// restarts the walk; a clone continues from the same point.
///
/// [`LpTab`]: crate::public::LpTab
/// [`LpTab::entries`]: crate::public::LpTab::entries
pub struct Entries<'a, V> {
  slots: slice::Iter<'a, Option<(String, V)>>,
  remaining: usize,
}

impl<'a, V> Entries<'a, V> {
  #[inline]
  pub(crate) fn new(slots: &'a [Option<(String, V)>], count: usize) -> Self {
    Self {
      slots: slots.iter(),
      remaining: count,
    }
  }
}

impl<'a, V> Iterator for Entries<'a, V> {
  type Item = (&'a str, &'a V);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }

    for slot in self.slots.by_ref() {
      if let Some((key, value)) = slot {
        self.remaining -= 1;
        return Some((key.as_str(), value));
      }
    }

    None
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<V> ExactSizeIterator for Entries<'_, V> {}

impl<V> FusedIterator for Entries<'_, V> {}

impl<V> Clone for Entries<'_, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      slots: self.slots.clone(),
      remaining: self.remaining,
    }
  }
}

impl<V> Debug for Entries<'_, V>
where
  V: Debug,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_list().entries(self.clone()).finish()
  }
}
