//! An open-addressing hash table with linear probing and prime-sized growth.
//!
//! `lptab` provides [`LpTab`], a string-keyed associative container that stores
//! every entry directly in one slot array. It is the storage layer behind the
//! word [`Dictionary`] and [`Frequency`] counter in [`words`].
//!
//! # Overview
//!
//! Keys are hashed with a polynomial string hash in a configurable base and
//! placed at the first free slot at or after their home slot. Lookups walk the
//! same path and stop at the first empty slot. Deleting a key reinserts the
//! rest of its cluster so that every remaining key stays reachable. When an
//! insert finds the table more than half full, the table is rebuilt at the
//! next size in a fixed schedule of primes.
//!
//! # Usage
//!
//! ```
//! use lptab::LpTab;
//!
//! // Create a table with the default hash base and capacity
//! let mut table: LpTab<u32> = LpTab::new();
//!
//! // Insert and update entries
//! table.set("hello", 1).unwrap();
//! table.set("hello", 2).unwrap();
//!
//! // Look them up
//! assert_eq!(table.get("hello"), Ok(&2));
//! assert!(table.contains("hello"));
//!
//! // Remove them
//! table.delete("hello").unwrap();
//! assert!(!table.contains("hello"));
//! assert!(table.get("hello").is_err());
//! ```
//!
//! # Configuration
//!
//! Defaults for the hash base and initial capacity come from the [`Params`]
//! trait. [`DefaultParams`] uses base `31` and [`Capacity::DEF`] slots:
//!
//! ```
//! use lptab::{LpTab, ConstParams, DefaultParams};
//!
//! // These are equivalent:
//! let table1: LpTab<u64> = LpTab::new();
//! let table2: LpTab<u64, DefaultParams> = LpTab::new();
//!
//! // Compile-time capacity and hash base:
//! let table3: LpTab<u64, ConstParams<1103, 27183>> = LpTab::new();
//! assert_eq!(table3.capacity(), 1103);
//! ```
//!
//! Both can also be chosen at runtime with [`LpTab::with_base`]. Capacities
//! are always taken from [`SCHEDULE`]; a requested size is rounded up to the
//! next entry.
//!
//! # Errors
//!
//! Operations fail with [`Error::KeyNotFound`] when a key is absent and
//! [`Error::TableFull`] when no slot is left. A failed operation does not
//! modify the table.
//!
//! # Concurrency
//!
//! [`LpTab`] is a single-threaded container. [`SharedTab`] wraps it in one
//! mutex for use from several threads.
//!
//! # Diagnostics
//!
//! Every table counts collisions, probe steps, the longest insert probe and
//! the number of rehashes; see [`Stats`]. Rehashes and cluster repairs are
//! also reported through the [`log`] facade.
//!
//! [`Capacity::DEF`]: crate::config::Capacity::DEF
//! [`ConstParams`]: crate::config::ConstParams
//! [`DefaultParams`]: crate::config::DefaultParams
//! [`Dictionary`]: crate::words::Dictionary
//! [`Frequency`]: crate::words::Frequency
//! [`Params`]: crate::config::Params
//! [`SCHEDULE`]: crate::config::SCHEDULE
//! [`log`]: https://docs.rs/log
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod array;
mod error;
mod iter;
mod params;
mod probe;
mod public;
mod shared;
mod stats;
mod table;
mod utils;

pub mod words;

#[cfg(test)]
mod tests;

pub(crate) use crate::utils::sync;

pub mod implementation {
  #![doc = include_str!("../IMPLEMENTATION.md")]
}

pub mod config {
  //! Configuration parameters which can be used to override the default table
  //! settings.

  pub use crate::params::Capacity;
  pub use crate::params::ConstParams;
  pub use crate::params::DEFAULT_HASH_BASE;
  pub use crate::params::DebugParams;
  pub use crate::params::DefaultParams;
  pub use crate::params::Params;
  pub use crate::params::ParamsExt;
  pub use crate::params::SCHEDULE;
}

#[doc(inline)]
pub use self::config::Capacity;

#[doc(inline)]
pub use self::config::ConstParams;

#[doc(inline)]
pub use self::config::DefaultParams;

#[doc(inline)]
pub use self::config::Params;

#[doc(inline)]
pub use self::config::ParamsExt;

pub use self::error::Error;
pub use self::error::Result;

pub use self::iter::Entries;

pub use self::public::LpTab;

pub use self::shared::SharedTab;

pub use self::stats::Stats;
