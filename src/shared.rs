//! A [`LpTab`] shared between threads.
//!
//! Deletion relocates entries in place and growth swaps the whole slot array,
//! so there is no safe unlocked read path: readers and writers take the same
//! exclusive lock.

use core::fmt::Debug;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use std::sync::PoisonError;

use crate::error::Result;
use crate::params::DefaultParams;
use crate::params::Params;
use crate::public::LpTab;
use crate::stats::Stats;
use crate::sync::Mutex;
use crate::sync::MutexGuard;

/// A [`LpTab`] behind a single mutex.
///
/// Every operation, lookups included, holds the lock for its full duration,
/// so no caller ever observes a half-finished rehash or cluster repair.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use lptab::SharedTab;
///
/// let table: Arc<SharedTab<usize>> = Arc::new(SharedTab::new());
///
/// let handles: Vec<_> = (0..4)
///   .map(|thread_id| {
///     let table = Arc::clone(&table);
///     thread::spawn(move || {
///       for index in 0..10 {
///         table.set(format!("{thread_id}-{index}"), index).unwrap();
///       }
///     })
///   })
///   .collect();
///
/// for handle in handles {
///   handle.join().unwrap();
/// }
///
/// assert_eq!(table.len(), 40);
/// assert_eq!(table.get("3-9"), Ok(9));
/// ```
pub struct SharedTab<V, P = DefaultParams>
where
  P: Params + ?Sized,
{
  inner: Mutex<LpTab<V, P>>,
}

impl<V, P> SharedTab<V, P>
where
  P: Params + ?Sized,
{
  /// Creates a new, empty shared table using the defaults from `P`.
  #[inline]
  pub fn new() -> Self {
    Self::from(LpTab::new())
  }

  /// Creates a new, empty shared table with the given hash base and capacity.
  #[inline]
  pub fn with_base(hash_base: u64, capacity: usize) -> Self {
    Self::from(LpTab::with_base(hash_base, capacity))
  }

  /// Consumes the lock and returns the table.
  #[inline]
  pub fn into_inner(self) -> LpTab<V, P> {
    self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  /// Runs `f` with exclusive access to the table.
  ///
  /// Use this for compound operations that must not interleave with other
  /// threads, such as read-modify-write sequences.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::SharedTab;
  ///
  /// let table: SharedTab<u64> = SharedTab::new();
  ///
  /// for word in ["a", "b", "a"] {
  ///   table.lock_with(|table| match table.get_mut(word) {
  ///     Ok(count) => *count += 1,
  ///     Err(_) => table.set(word, 1).unwrap(),
  ///   });
  /// }
  ///
  /// assert_eq!(table.get("a"), Ok(2));
  /// ```
  #[inline]
  pub fn lock_with<F, R>(&self, f: F) -> R
  where
    F: FnOnce(&mut LpTab<V, P>) -> R,
  {
    f(&mut self.lock())
  }

  /// Inserts a value, overwriting any value already stored under `key`.
  ///
  /// # Errors
  ///
  /// See [`LpTab::set`].
  #[inline]
  pub fn set<K>(&self, key: K, value: V) -> Result<()>
  where
    K: Into<String>,
  {
    self.lock().set(key, value)
  }

  /// Inserts a value, returning the value previously stored under `key`.
  ///
  /// # Errors
  ///
  /// See [`LpTab::insert`].
  #[inline]
  pub fn insert<K>(&self, key: K, value: V) -> Result<Option<V>>
  where
    K: Into<String>,
  {
    self.lock().insert(key, value)
  }

  /// Returns a copy of the value stored under `key`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::KeyNotFound`] if `key` is absent.
  ///
  /// [`Error::KeyNotFound`]: crate::Error::KeyNotFound
  #[inline]
  pub fn get(&self, key: &str) -> Result<V>
  where
    V: Clone,
  {
    self.lock().get(key).cloned()
  }

  /// Applies `f` to the value stored under `key` while holding the lock.
  ///
  /// # Errors
  ///
  /// Returns [`Error::KeyNotFound`] if `key` is absent; `f` is not called.
  ///
  /// [`Error::KeyNotFound`]: crate::Error::KeyNotFound
  #[inline]
  pub fn with<F, R>(&self, key: &str, f: F) -> Result<R>
  where
    F: FnOnce(&V) -> R,
  {
    self.lock().get(key).map(f)
  }

  /// Returns `true` if `key` is stored in the table.
  #[inline]
  pub fn contains(&self, key: &str) -> bool {
    self.lock().contains(key)
  }

  /// Removes the entry stored under `key`.
  ///
  /// # Errors
  ///
  /// See [`LpTab::delete`].
  #[inline]
  pub fn delete(&self, key: &str) -> Result<()> {
    self.lock().delete(key)
  }

  /// Removes the entry stored under `key` and returns its value.
  ///
  /// # Errors
  ///
  /// See [`LpTab::remove`].
  #[inline]
  pub fn remove(&self, key: &str) -> Result<V> {
    self.lock().remove(key)
  }

  /// Returns the number of entries in the table.
  #[inline]
  pub fn len(&self) -> usize {
    self.lock().len()
  }

  /// Returns `true` if the table contains no entries.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  /// Returns the number of slots in the table.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.lock().capacity()
  }

  /// Returns a snapshot of the table's probe counters.
  #[inline]
  pub fn stats(&self) -> Stats {
    self.lock().stats()
  }

  /// Copies every entry out under a single lock acquisition.
  #[inline]
  pub fn snapshot(&self) -> Vec<(String, V)>
  where
    V: Clone,
  {
    self
      .lock()
      .entries()
      .map(|(key, value)| (key.to_owned(), value.clone()))
      .collect()
  }

  #[inline]
  fn lock(&self) -> MutexGuard<'_, LpTab<V, P>> {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<V, P> From<LpTab<V, P>> for SharedTab<V, P>
where
  P: Params + ?Sized,
{
  #[inline]
  fn from(other: LpTab<V, P>) -> Self {
    Self {
      inner: Mutex::new(other),
    }
  }
}

impl<V, P> Default for SharedTab<V, P>
where
  P: Params + ?Sized,
{
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<V, P> Debug for SharedTab<V, P>
where
  V: Debug,
  P: Params + ?Sized,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_tuple("SharedTab").field(&*self.lock()).finish()
  }
}
