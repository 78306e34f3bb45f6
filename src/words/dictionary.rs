use std::io;
use std::io::BufRead;
use std::time::Duration;
use std::time::Instant;

use log::info;
use log::warn;
use thiserror::Error;

use crate::error::Error;
use crate::error::Result;
use crate::public::LpTab;
use crate::stats::Stats;

/// Failure while bulk-loading a [`Dictionary`].
///
/// Words read before the failure stay in the dictionary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
  /// Reading the source failed.
  #[error("failed to read word list")]
  Io(#[from] io::Error),
  /// The time budget ran out before the source was exhausted.
  #[error("time limit of {limit:?} exceeded after {words} words")]
  TimedOut {
    /// Words loaded before the budget ran out.
    words: usize,
    /// The budget that was exceeded.
    limit: Duration,
  },
  /// The table rejected a word.
  #[error(transparent)]
  Table(#[from] Error),
}

/// Summary of a completed [`Dictionary::load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct LoadReport {
  /// Lines read from the source.
  pub words: usize,
  /// Wall-clock time spent loading.
  pub elapsed: Duration,
  /// The dictionary's probe counters once loading finished.
  pub stats: Stats,
}

/// A case-insensitive set of words.
///
/// # Examples
///
/// ```
/// use lptab::words::Dictionary;
///
/// let mut dictionary: Dictionary = Dictionary::new(31, 17);
///
/// dictionary.add_word("Hello").unwrap();
///
/// assert!(dictionary.find_word("hello"));
/// assert!(dictionary.find_word("HELLO"));
/// assert!(!dictionary.find_word("world"));
/// ```
#[derive(Debug)]
pub struct Dictionary {
  words: LpTab<()>,
}

impl Dictionary {
  /// Creates an empty dictionary backed by a table with the given hash base
  /// and initial capacity.
  #[inline]
  pub fn new(hash_base: u64, capacity: usize) -> Self {
    Self {
      words: LpTab::with_base(hash_base, capacity),
    }
  }

  /// Returns the number of distinct words.
  #[inline]
  pub const fn len(&self) -> usize {
    self.words.len()
  }

  /// Returns `true` if the dictionary holds no words.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Returns the probe counters of the backing table.
  #[inline]
  pub fn stats(&self) -> Stats {
    self.words.stats()
  }

  /// Adds `word`, lowercased.
  ///
  /// # Errors
  ///
  /// Returns [`Error::TableFull`] if the backing table cannot grow.
  #[inline]
  pub fn add_word(&mut self, word: &str) -> Result<()> {
    self.words.set(word.to_lowercase(), ())
  }

  /// Returns `true` if `word` (in any case) is in the dictionary.
  #[inline]
  pub fn find_word(&self, word: &str) -> bool {
    self.words.contains(&word.to_lowercase())
  }

  /// Removes `word` (in any case) from the dictionary.
  ///
  /// # Errors
  ///
  /// Returns [`Error::KeyNotFound`] if the word is not present.
  #[inline]
  pub fn delete_word(&mut self, word: &str) -> Result<()> {
    self.words.delete(&word.to_lowercase())
  }

  /// Adds one word per line from `reader`.
  ///
  /// Only the line terminator is stripped, so a line containing spaces is
  /// stored as a single entry. With a `time_limit`, the budget is checked
  /// before each line.
  ///
  /// # Errors
  ///
  /// Returns [`LoadError::TimedOut`] if the budget runs out,
  /// [`LoadError::Io`] if reading fails, and [`LoadError::Table`] if the
  /// table rejects a word.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::words::{Dictionary, LoadReport};
  ///
  /// let mut dictionary: Dictionary = Dictionary::new(27183, 17);
  /// let report: LoadReport = dictionary.load("apple\nBanana\ncherry\n".as_bytes(), None).unwrap();
  ///
  /// assert_eq!(report.words, 3);
  /// assert!(dictionary.find_word("banana"));
  /// ```
  pub fn load<R>(&mut self, reader: R, time_limit: Option<Duration>) -> Result<LoadReport, LoadError>
  where
    R: BufRead,
  {
    let start: Instant = Instant::now();
    let mut words: usize = 0;

    for line in reader.lines() {
      if let Some(limit) = time_limit
        && start.elapsed() > limit
      {
        warn!("dictionary load timed out after {words} words");
        return Err(LoadError::TimedOut { words, limit });
      }

      self.add_word(&line?)?;
      words += 1;
    }

    let report: LoadReport = LoadReport {
      words,
      elapsed: start.elapsed(),
      stats: self.stats(),
    };

    info!(
      "loaded {} words into {} slots in {:?} ({:?})",
      report.words,
      self.words.capacity(),
      report.elapsed,
      report.stats,
    );

    Ok(report)
  }
}

impl Default for Dictionary {
  #[inline]
  fn default() -> Self {
    Self {
      words: LpTab::new(),
    }
  }
}
