use core::any;
use core::fmt::Debug;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use core::marker::PhantomData;

// -----------------------------------------------------------------------------
// Growth Schedule
// -----------------------------------------------------------------------------

/// Ascending table sizes used when the table grows.
///
/// Every entry is prime and roughly 1.2x its predecessor. Prime sizes keep the
/// polynomial string hash from folding keys onto a few residues.
pub const SCHEDULE: &[usize] = &[
  3, 7, 11, 17, 23, 29, 37, 47, 59, 71, 89, 107, 131, 163, 197, 239, 293, 353, 431, 521, 631,
  761, 919, 1103, 1327, 1597, 1931, 2333, 2801, 3371, 4049, 4861, 5839, 7013, 8419, 10103,
  12143, 14591, 17519, 21023, 25229, 30313, 36353, 43627, 52361, 62851, 75521, 90523, 108631,
  130363, 156437, 187751, 225307, 270371, 324449, 389357, 467237, 560689, 672827, 807403,
  968897, 1162687, 1395263, 1674319, 2009191, 2411033, 2893249, 3471899, 4166287, 4999559,
  5999471, 7199369,
];

const _: () = assert!(
  !SCHEDULE.is_empty(),
  "invalid params: `SCHEDULE` must not be empty",
);

const _: () = assert!(
  SCHEDULE[0] >= 1,
  "invalid params: `SCHEDULE` must start at a non-zero capacity",
);

const _: () = {
  let mut index: usize = 1;

  while index < SCHEDULE.len() {
    assert!(
      SCHEDULE[index - 1] < SCHEDULE[index],
      "invalid params: `SCHEDULE` must be strictly increasing",
    );

    index += 1;
  }
};

/// The hash base used when none is configured.
pub const DEFAULT_HASH_BASE: u64 = 31;

// -----------------------------------------------------------------------------
// Configurable Params
// -----------------------------------------------------------------------------

/// Configuration parameters for a [`LpTab`].
///
/// Supplies the defaults used by [`LpTab::new`]. The simplest approach is
/// [`ConstParams`]:
///
/// ```
/// use lptab::{LpTab, ConstParams};
///
/// type WordTable<V> = LpTab<V, ConstParams<1103, 27183>>;
///
/// let table: WordTable<u64> = WordTable::new();
/// assert_eq!(table.capacity(), 1103);
/// assert_eq!(table.hash_base(), 27183);
/// ```
///
/// # Implementing `Params`
///
/// ```
/// use lptab::{Params, Capacity, LpTab};
///
/// struct LargeParams;
///
/// impl Params for LargeParams {
///   const HASH_BASE: u64 = 250_726;
///   const CAPACITY: Capacity = Capacity::new(250_727);
/// }
///
/// let table: LpTab<u64, LargeParams> = LpTab::new();
/// assert_eq!(table.capacity(), 270_371);
/// ```
///
/// [`Capacity::new`] rounds values up to the next entry of the growth
/// schedule.
///
/// [`LpTab`]: crate::public::LpTab
/// [`LpTab::new`]: crate::public::LpTab::new
pub trait Params {
  /// The base of the polynomial string hash.
  const HASH_BASE: u64 = DefaultParams::HASH_BASE;

  /// The number of slots a new table starts with.
  const CAPACITY: Capacity = DefaultParams::CAPACITY;
}

// -----------------------------------------------------------------------------
// Configurable Params - Extensions
// -----------------------------------------------------------------------------

/// Derived helpers for [`Params`].
///
/// Automatically implemented for all [`Params`] types.
///
/// # Example
///
/// ```
/// use lptab::{ParamsExt, ConstParams};
///
/// println!("{:#?}", <ConstParams<59> as ParamsExt>::debug());
/// ```
pub trait ParamsExt: Params + Sealed {
  #[inline]
  fn debug() -> DebugParams<Self> {
    DebugParams {
      marker: PhantomData,
    }
  }
}

// -----------------------------------------------------------------------------
// Debug Params
// -----------------------------------------------------------------------------

/// A helper type for displaying [`Params`] configuration.
///
/// Returned by [`ParamsExt::debug`].
#[derive(Clone, Copy)]
pub struct DebugParams<P>
where
  P: ?Sized,
{
  marker: PhantomData<fn(P)>,
}

impl<P> Debug for DebugParams<P>
where
  P: Params + ?Sized,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct(any::type_name::<P>())
      .field("HASH_BASE", &P::HASH_BASE)
      .field("CAPACITY", &P::CAPACITY)
      .finish()
  }
}

// -----------------------------------------------------------------------------
// Default Params
// -----------------------------------------------------------------------------

/// The default table configuration: hash base `31`, [`Capacity::DEF`] slots.
///
/// # Example
///
/// ```
/// use lptab::{LpTab, DefaultParams};
///
/// // These are equivalent:
/// let table1: LpTab<u64> = LpTab::new();
/// let table2: LpTab<u64, DefaultParams> = LpTab::new();
///
/// assert_eq!(table1.capacity(), table2.capacity());
/// ```
#[derive(Clone, Copy)]
#[non_exhaustive]
pub struct DefaultParams;

impl Debug for DefaultParams {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    Debug::fmt(&<Self as ParamsExt>::debug(), f)
  }
}

impl Params for DefaultParams {
  const HASH_BASE: u64 = DEFAULT_HASH_BASE;
  const CAPACITY: Capacity = Capacity::DEF;
}

// -----------------------------------------------------------------------------
// Const-Generic Params
// -----------------------------------------------------------------------------

/// A [`Params`] implementation with compile-time capacity and hash base.
///
/// `N` is rounded up to the next schedule entry; `B` defaults to `31`.
///
/// # Examples
///
/// ```
/// use lptab::{LpTab, ConstParams};
///
/// let table: LpTab<String, ConstParams<100>> = LpTab::new();
/// assert_eq!(table.capacity(), 107);
/// assert_eq!(table.hash_base(), 31);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub struct ConstParams<const N: usize, const B: u64 = DEFAULT_HASH_BASE>;

impl<const N: usize, const B: u64> Params for ConstParams<N, B> {
  const HASH_BASE: u64 = B;
  const CAPACITY: Capacity = Capacity::new(N);
}

// -----------------------------------------------------------------------------
// Auto-implement Derive
// -----------------------------------------------------------------------------

mod private {
  pub trait Sealed {}
}

use private::Sealed;

impl<P> Sealed for P where P: Params + ?Sized {}
impl<P> ParamsExt for P where P: Params + ?Sized {}

// -----------------------------------------------------------------------------
// Capacity
// -----------------------------------------------------------------------------

/// A validated table capacity.
///
/// Always one of the values in [`SCHEDULE`], so growth can step to the next
/// larger entry with [`next()`].
///
/// # Construction
///
/// [`new()`] rounds an arbitrary value up to the nearest schedule entry and
/// clamps to <code>[MIN]..=[MAX]</code>.
///
/// ```
/// use lptab::Capacity;
///
/// // Exact schedule entry
/// assert_eq!(Capacity::new(17).as_usize(), 17);
///
/// // Rounded up
/// assert_eq!(Capacity::new(100).as_usize(), 107);
///
/// // Clamped to minimum
/// assert_eq!(Capacity::new(0), Capacity::MIN);
///
/// // Clamped to maximum
/// assert_eq!(Capacity::new(usize::MAX), Capacity::MAX);
/// ```
///
/// [MIN]: Self::MIN
/// [MAX]: Self::MAX
/// [`new()`]: Self::new
/// [`next()`]: Self::next
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Capacity {
  rank: usize,
}

impl Capacity {
  /// The smallest capacity in the schedule.
  pub const MIN: Self = Self { rank: 0 };

  /// The largest capacity in the schedule. Tables at this size stop growing.
  pub const MAX: Self = Self {
    rank: SCHEDULE.len() - 1,
  };

  /// The default capacity (17 slots).
  pub const DEF: Self = Self::new(17);

  /// Creates a new [`Capacity`] from an arbitrary value.
  ///
  /// Returns the smallest schedule entry that is at least `value`, or
  /// [`MAX`] if `value` exceeds every entry.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::Capacity;
  ///
  /// assert_eq!(Capacity::new(18).as_usize(), 23);
  /// assert_eq!(Capacity::new(1).as_usize(), 3);
  /// ```
  ///
  /// [`MAX`]: Self::MAX
  #[inline]
  pub const fn new(value: usize) -> Self {
    let mut rank: usize = 0;

    while rank < SCHEDULE.len() {
      if SCHEDULE[rank] >= value {
        return Self { rank };
      }

      rank += 1;
    }

    Self::MAX
  }

  /// Returns the capacity as a [`usize`].
  #[inline]
  pub const fn as_usize(self) -> usize {
    SCHEDULE[self.rank]
  }

  /// Returns the position of this capacity within [`SCHEDULE`].
  #[inline]
  pub const fn rank(self) -> usize {
    self.rank
  }

  /// Returns the next larger capacity, or `None` at [`MAX`].
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::Capacity;
  ///
  /// assert_eq!(Capacity::DEF.next().map(Capacity::as_usize), Some(23));
  /// assert_eq!(Capacity::MAX.next(), None);
  /// ```
  ///
  /// [`MAX`]: Self::MAX
  #[inline]
  pub const fn next(self) -> Option<Self> {
    if self.rank == Self::MAX.rank {
      None
    } else {
      Some(Self { rank: self.rank + 1 })
    }
  }
}

impl Debug for Capacity {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    write!(f, "{:?} (rank {:?})", self.as_usize(), self.rank)
  }
}

impl Default for Capacity {
  #[inline]
  fn default() -> Self {
    Self::DEF
  }
}

impl From<Capacity> for usize {
  #[inline]
  fn from(other: Capacity) -> Self {
    other.as_usize()
  }
}
