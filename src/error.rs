//! Error types.

use thiserror::Error;

/// A specialized [`Result`] type for table operations.
///
/// [`Result`]: core::result::Result
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The ways a table operation can fail.
///
/// A failed operation leaves the table exactly as it was.
#[derive(Clone, Debug, Error, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  /// The key is not stored in the table.
  #[error("key not found: {key:?}")]
  KeyNotFound {
    /// The key that was looked up.
    key: String,
  },
  /// Every slot is occupied and the table can no longer grow.
  #[error("table full: all {capacity} slots are occupied")]
  TableFull {
    /// The capacity of the saturated table.
    capacity: usize,
  },
}

impl Error {
  #[inline]
  pub(crate) fn key_not_found(key: &str) -> Self {
    Self::KeyNotFound {
      key: key.to_owned(),
    }
  }

  /// Returns `true` if this is [`Error::KeyNotFound`].
  #[inline]
  pub const fn is_key_not_found(&self) -> bool {
    matches!(self, Self::KeyNotFound { .. })
  }

  /// Returns `true` if this is [`Error::TableFull`].
  #[inline]
  pub const fn is_table_full(&self) -> bool {
    matches!(self, Self::TableFull { .. })
  }
}
