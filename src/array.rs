//! Fixed-length slot storage.
//!
//! Provides [`Array`], the backing storage for table slots. The length is
//! chosen once at construction; growing a table allocates a new [`Array`].

use core::fmt::Debug;
use core::fmt::Formatter;
use core::fmt::Result;
use core::mem;

use crate::params::Capacity;

/// A fixed-size array of optional elements.
#[repr(transparent)]
pub(crate) struct Array<T> {
  slots: Box<[Option<T>]>,
}

impl<T> Array<T> {
  /// Creates a new array with every slot empty.
  #[inline]
  pub(crate) fn new(capacity: Capacity) -> Self {
    Self {
      slots: (0..capacity.as_usize()).map(|_| None).collect(),
    }
  }

  #[inline]
  pub(crate) fn get(&self, index: usize) -> Option<&T> {
    self.slots[index].as_ref()
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
    self.slots[index].as_mut()
  }

  /// Stores `value` at `index`, returning the previous occupant.
  #[inline]
  pub(crate) fn put(&mut self, index: usize, value: T) -> Option<T> {
    self.slots[index].replace(value)
  }

  /// Empties the slot at `index`, returning its occupant.
  #[inline]
  pub(crate) fn take(&mut self, index: usize) -> Option<T> {
    self.slots[index].take()
  }

  /// Moves every occupied element out, leaving the array empty.
  #[inline]
  pub(crate) fn drain(&mut self) -> impl Iterator<Item = T> {
    mem::take(&mut self.slots).into_vec().into_iter().flatten()
  }

  #[inline]
  pub(crate) fn as_slice(&self) -> &[Option<T>] {
    &self.slots
  }
}

impl<T> Debug for Array<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_list().entries(self.slots.iter()).finish()
  }
}
