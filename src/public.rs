use core::fmt::Debug;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use core::marker::PhantomData;

use crate::error::Result;
use crate::iter::Entries;
use crate::params::Capacity;
use crate::params::DefaultParams;
use crate::params::Params;
use crate::params::ParamsExt;
use crate::stats::Stats;
use crate::table::Table;

/// An open-addressing hash table with string keys.
///
/// `LpTab` stores `(String, V)` pairs directly in one slot array and resolves
/// collisions by linear probing. It grows through the prime [`SCHEDULE`]
/// whenever an insert finds the table more than half full.
///
/// See the [crate-level documentation][crate] for an overview and examples.
///
/// # Type Parameters
///
/// - `V`: The type of values stored in the table. Use `()` for a set of keys.
/// - `P`: Configuration parameters implementing [`Params`], supplying the
///   defaults for [`new()`]. Defaults to [`DefaultParams`] (hash base 31,
///   17 slots).
///
/// # Examples
///
/// ```
/// use lptab::LpTab;
///
/// let mut table: LpTab<i32> = LpTab::new();
///
/// table.set("answer", 42).unwrap();
/// assert_eq!(table.get("answer"), Ok(&42));
/// ```
///
/// Custom hash base and capacity chosen at runtime:
///
/// ```
/// use lptab::LpTab;
///
/// let table: LpTab<i32> = LpTab::with_base(27183, 1103);
/// assert_eq!(table.capacity(), 1103);
/// assert_eq!(table.hash_base(), 27183);
/// ```
///
/// [`SCHEDULE`]: crate::config::SCHEDULE
/// [`new()`]: Self::new
pub struct LpTab<V, P = DefaultParams>
where
  P: Params + ?Sized,
{
  inner: Table<V>,
  marker: PhantomData<fn(P)>,
}

impl<V, P> LpTab<V, P>
where
  P: Params + ?Sized,
{
  /// Creates a new, empty table using the hash base and capacity from `P`.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let table: LpTab<String> = LpTab::new();
  ///
  /// assert!(table.is_empty());
  /// assert_eq!(table.capacity(), 17);
  /// ```
  #[inline]
  pub fn new() -> Self {
    Self::from_table(Table::new(P::HASH_BASE, P::CAPACITY))
  }

  /// Creates a new, empty table with the given hash base and capacity.
  ///
  /// `capacity` is rounded up to the next entry of the growth schedule; see
  /// [`Capacity::new`].
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let table: LpTab<u64> = LpTab::with_base(31, 100);
  /// assert_eq!(table.capacity(), 107);
  /// ```
  #[inline]
  pub fn with_base(hash_base: u64, capacity: usize) -> Self {
    Self::from_table(Table::new(hash_base, Capacity::new(capacity)))
  }

  #[inline]
  const fn from_table(inner: Table<V>) -> Self {
    Self {
      inner,
      marker: PhantomData,
    }
  }

  /// Returns the number of slots in the table.
  ///
  /// Only ever increases, and only as a side effect of [`set()`].
  ///
  /// [`set()`]: Self::set
  #[inline]
  pub const fn capacity(&self) -> usize {
    self.inner.cap()
  }

  /// Returns the hash base the table was created with.
  #[inline]
  pub const fn hash_base(&self) -> u64 {
    self.inner.hash_base()
  }

  /// Returns the number of entries in the table.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let mut table: LpTab<i32> = LpTab::new();
  /// assert_eq!(table.len(), 0);
  ///
  /// table.set("one", 1).unwrap();
  /// table.set("two", 2).unwrap();
  /// assert_eq!(table.len(), 2);
  /// ```
  #[inline]
  pub const fn len(&self) -> usize {
    self.inner.len()
  }

  /// Returns `true` if the table contains no entries.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  /// Returns `true` if every slot is occupied.
  ///
  /// Growth keeps the table at most about half full, so this only becomes
  /// `true` once the table has reached [`Capacity::MAX`].
  #[inline]
  pub const fn is_full(&self) -> bool {
    self.inner.is_full()
  }

  /// Returns the fraction of slots that are occupied.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let mut table: LpTab<()> = LpTab::with_base(31, 7);
  ///
  /// table.set("a", ()).unwrap();
  /// table.set("b", ()).unwrap();
  ///
  /// assert!((table.load_factor() - 2.0 / 7.0).abs() < f64::EPSILON);
  /// ```
  #[allow(clippy::cast_precision_loss, reason = "capacity is at most 7_199_369")]
  #[inline]
  pub fn load_factor(&self) -> f64 {
    self.len() as f64 / self.capacity() as f64
  }

  /// Returns the home slot of `key` at the current capacity.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let table: LpTab<()> = LpTab::with_base(31, 7);
  ///
  /// // 'a' is code point 97, and 97 % 7 == 6
  /// assert_eq!(table.hash("a"), 6);
  /// ```
  #[inline]
  pub fn hash(&self, key: &str) -> usize {
    self.inner.hash(key)
  }

  /// Inserts a value, overwriting any value already stored under `key`.
  ///
  /// If the table is more than half full before the insert, it first grows
  /// to the next capacity in the schedule.
  ///
  /// # Errors
  ///
  /// Returns [`Error::TableFull`] if every slot is occupied and the table
  /// cannot grow any further.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let mut table: LpTab<&str> = LpTab::new();
  ///
  /// table.set("key", "first").unwrap();
  /// table.set("key", "second").unwrap();
  ///
  /// assert_eq!(table.len(), 1);
  /// assert_eq!(table.get("key"), Ok(&"second"));
  /// ```
  ///
  /// [`Error::TableFull`]: crate::Error::TableFull
  #[inline]
  pub fn set<K>(&mut self, key: K, value: V) -> Result<()>
  where
    K: Into<String>,
  {
    self.insert(key, value).map(drop)
  }

  /// Inserts a value, returning the value previously stored under `key`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::TableFull`] if every slot is occupied and the table
  /// cannot grow any further.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let mut table: LpTab<u32> = LpTab::new();
  ///
  /// assert_eq!(table.insert("key", 1), Ok(None));
  /// assert_eq!(table.insert("key", 2), Ok(Some(1)));
  /// ```
  ///
  /// [`Error::TableFull`]: crate::Error::TableFull
  #[inline]
  pub fn insert<K>(&mut self, key: K, value: V) -> Result<Option<V>>
  where
    K: Into<String>,
  {
    self.inner.set(key.into(), value)
  }

  /// Returns a reference to the value stored under `key`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::KeyNotFound`] if `key` is absent.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::{Error, LpTab};
  ///
  /// let mut table: LpTab<i32> = LpTab::new();
  /// table.set("present", 1).unwrap();
  ///
  /// assert_eq!(table.get("present"), Ok(&1));
  /// assert!(matches!(table.get("absent"), Err(Error::KeyNotFound { .. })));
  /// ```
  ///
  /// [`Error::KeyNotFound`]: crate::Error::KeyNotFound
  #[inline]
  pub fn get(&self, key: &str) -> Result<&V> {
    self.inner.get(key)
  }

  /// Returns a mutable reference to the value stored under `key`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::KeyNotFound`] if `key` is absent.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let mut table: LpTab<u64> = LpTab::new();
  /// table.set("word", 1).unwrap();
  ///
  /// *table.get_mut("word").unwrap() += 1;
  /// assert_eq!(table.get("word"), Ok(&2));
  /// ```
  ///
  /// [`Error::KeyNotFound`]: crate::Error::KeyNotFound
  #[inline]
  pub fn get_mut(&mut self, key: &str) -> Result<&mut V> {
    self.inner.get_mut(key)
  }

  /// Returns `true` if `key` is stored in the table.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let mut table: LpTab<()> = LpTab::new();
  /// table.set("present", ()).unwrap();
  ///
  /// assert!(table.contains("present"));
  /// assert!(!table.contains("absent"));
  /// ```
  #[inline]
  pub fn contains(&self, key: &str) -> bool {
    self.inner.find(key).is_some()
  }

  /// Returns a reference to the value stored under `key`, or `None` if it
  /// is absent.
  ///
  /// Unlike [`get()`], a miss does not build an [`Error`].
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let mut table: LpTab<i32> = LpTab::new();
  /// table.set("present", 1).unwrap();
  ///
  /// assert_eq!(table.find("present"), Some(&1));
  /// assert_eq!(table.find("absent"), None);
  /// ```
  ///
  /// [`get()`]: Self::get
  /// [`Error`]: crate::Error
  #[inline]
  pub fn find(&self, key: &str) -> Option<&V> {
    self.inner.lookup(key)
  }

  /// Returns a mutable reference to the value stored under `key`, or `None`
  /// if it is absent.
  #[inline]
  pub fn find_mut(&mut self, key: &str) -> Option<&mut V> {
    self.inner.lookup_mut(key)
  }

  /// Removes the entry stored under `key`.
  ///
  /// Entries later in the same cluster are reinserted, so they may move to
  /// earlier slots.
  ///
  /// # Errors
  ///
  /// Returns [`Error::KeyNotFound`] if `key` is absent; the table is left
  /// unchanged.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let mut table: LpTab<i32> = LpTab::new();
  /// table.set("key", 1).unwrap();
  ///
  /// assert!(table.delete("key").is_ok());
  /// assert!(table.delete("key").is_err());
  /// assert!(table.is_empty());
  /// ```
  ///
  /// [`Error::KeyNotFound`]: crate::Error::KeyNotFound
  #[inline]
  pub fn delete(&mut self, key: &str) -> Result<()> {
    self.remove(key).map(drop)
  }

  /// Removes the entry stored under `key` and returns its value.
  ///
  /// # Errors
  ///
  /// Returns [`Error::KeyNotFound`] if `key` is absent; the table is left
  /// unchanged.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let mut table: LpTab<String> = LpTab::new();
  /// table.set("key", "value".to_string()).unwrap();
  ///
  /// assert_eq!(table.remove("key"), Ok("value".to_string()));
  /// ```
  ///
  /// [`Error::KeyNotFound`]: crate::Error::KeyNotFound
  #[inline]
  pub fn remove(&mut self, key: &str) -> Result<V> {
    self.inner.remove(key)
  }

  /// Returns an iterator over all `(key, value)` pairs in unspecified order.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::LpTab;
  ///
  /// let mut table: LpTab<u32> = LpTab::new();
  /// table.set("a", 1).unwrap();
  /// table.set("b", 2).unwrap();
  ///
  /// let mut pairs: Vec<(&str, &u32)> = table.entries().collect();
  /// pairs.sort();
  ///
  /// assert_eq!(pairs, [("a", &1), ("b", &2)]);
  /// ```
  #[inline]
  pub fn entries(&self) -> Entries<'_, V> {
    self.inner.entries()
  }

  /// Returns a snapshot of the table's probe counters.
  #[inline]
  pub fn stats(&self) -> Stats {
    self.inner.stats()
  }

  #[cfg(test)]
  #[inline]
  pub(crate) const fn as_table(&self) -> &Table<V> {
    &self.inner
  }
}

impl<V, P> Debug for LpTab<V, P>
where
  V: Debug,
  P: Params + ?Sized,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("LpTab")
      .field("params", &P::debug())
      .field("capacity", &self.inner.capacity())
      .field("entries", &self.inner)
      .finish()
  }
}

impl<V, P> Default for LpTab<V, P>
where
  P: Params + ?Sized,
{
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<'a, V, P> IntoIterator for &'a LpTab<V, P>
where
  P: Params + ?Sized,
{
  type Item = (&'a str, &'a V);
  type IntoIter = Entries<'a, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.entries()
  }
}
