use std::io;
use std::io::BufRead;

use thiserror::Error;

use crate::error::Error;
use crate::error::Result;
use crate::public::LpTab;
use crate::stats::Stats;

/// How common a word is relative to the most frequent word seen.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rarity {
  /// Seen at least 1/100th as often as the most frequent word.
  Common,
  /// Between the common and rare thresholds.
  Uncommon,
  /// Seen less than 1/1000th as often as the most frequent word.
  Rare,
  /// Never seen.
  Misspelt,
}

impl Rarity {
  /// Classifies a word seen `count` times when the most frequent word was
  /// seen `max` times.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::words::Rarity;
  ///
  /// assert_eq!(Rarity::classify(10, 1000), Rarity::Common);
  /// assert_eq!(Rarity::classify(9, 1000), Rarity::Uncommon);
  /// assert_eq!(Rarity::classify(1, 1001), Rarity::Rare);
  /// assert_eq!(Rarity::classify(0, 1000), Rarity::Misspelt);
  /// ```
  pub const fn classify(count: u64, max: u64) -> Self {
    if count == 0 {
      Self::Misspelt
    } else if count.saturating_mul(100) >= max {
      Self::Common
    } else if count.saturating_mul(1000) < max {
      Self::Rare
    } else {
      Self::Uncommon
    }
  }
}

/// Failure while counting words from a reader.
///
/// Words counted before the failure are kept.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CountError {
  /// Reading the source failed.
  #[error("failed to read text")]
  Io(#[from] io::Error),
  /// The table rejected a word.
  #[error(transparent)]
  Table(#[from] Error),
}

/// Case-insensitive word counts.
///
/// # Examples
///
/// ```
/// use lptab::words::{Frequency, Rarity};
///
/// let mut frequency: Frequency = Frequency::new(31, 17);
///
/// frequency.add_text("the cat and The dog").unwrap();
///
/// assert_eq!(frequency.count("the"), 2);
/// assert_eq!(frequency.max_word(), Some(("the", 2)));
/// assert_eq!(frequency.rarity("cat"), Rarity::Common);
/// assert_eq!(frequency.rarity("cow"), Rarity::Misspelt);
/// ```
#[derive(Debug)]
pub struct Frequency {
  counts: LpTab<u64>,
  max_word: Option<(String, u64)>,
}

impl Frequency {
  /// Creates an empty counter backed by a table with the given hash base and
  /// initial capacity.
  #[inline]
  pub fn new(hash_base: u64, capacity: usize) -> Self {
    Self {
      counts: LpTab::with_base(hash_base, capacity),
      max_word: None,
    }
  }

  /// Returns the number of distinct words seen.
  #[inline]
  pub const fn len(&self) -> usize {
    self.counts.len()
  }

  /// Returns `true` if no words have been seen.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  /// Returns the probe counters of the backing table.
  #[inline]
  pub fn stats(&self) -> Stats {
    self.counts.stats()
  }

  /// Returns the most frequent word and its count.
  ///
  /// On ties the word that reached the count first is kept.
  #[inline]
  pub fn max_word(&self) -> Option<(&str, u64)> {
    self
      .max_word
      .as_ref()
      .map(|(word, count)| (word.as_str(), *count))
  }

  /// Returns how many times `word` (in any case) has been seen.
  #[inline]
  pub fn count(&self, word: &str) -> u64 {
    self.counts.find(&word.to_lowercase()).copied().unwrap_or(0)
  }

  /// Classifies `word` against the most frequent word seen so far.
  #[inline]
  pub fn rarity(&self, word: &str) -> Rarity {
    let max: u64 = self.max_word.as_ref().map_or(0, |(_, count)| *count);
    Rarity::classify(self.count(word), max)
  }

  /// Counts every whitespace-separated word in `text`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::TableFull`] if the backing table cannot grow.
  ///
  /// [`Error::TableFull`]: crate::Error::TableFull
  pub fn add_text(&mut self, text: &str) -> Result<()> {
    for word in text.split_whitespace() {
      self.add_word(&word.to_lowercase())?;
    }

    Ok(())
  }

  /// Counts every whitespace-separated word read from `reader`.
  ///
  /// # Errors
  ///
  /// Returns [`CountError::Io`] if reading fails and [`CountError::Table`]
  /// if the backing table cannot grow.
  pub fn add_reader<R>(&mut self, reader: R) -> Result<(), CountError>
  where
    R: BufRead,
  {
    for line in reader.lines() {
      self.add_text(&line?)?;
    }

    Ok(())
  }

  /// Returns every word with its count, most frequent first.
  ///
  /// Words with equal counts are ordered alphabetically.
  ///
  /// # Examples
  ///
  /// ```
  /// use lptab::words::Frequency;
  ///
  /// let mut frequency: Frequency = Frequency::new(31, 17);
  /// frequency.add_text("b a b c a b").unwrap();
  ///
  /// let ranking: Vec<(String, u64)> = frequency.ranking();
  ///
  /// assert_eq!(ranking[0], ("b".to_string(), 3));
  /// assert_eq!(ranking[1], ("a".to_string(), 2));
  /// assert_eq!(ranking[2], ("c".to_string(), 1));
  /// ```
  pub fn ranking(&self) -> Vec<(String, u64)> {
    let mut ranking: Vec<(String, u64)> = self
      .counts
      .entries()
      .map(|(word, count)| (word.to_owned(), *count))
      .collect();

    ranking.sort_unstable_by(|lhs, rhs| rhs.1.cmp(&lhs.1).then_with(|| lhs.0.cmp(&rhs.0)));

    ranking
  }

  fn add_word(&mut self, word: &str) -> Result<()> {
    let count: u64 = match self.counts.find_mut(word) {
      Some(count) => {
        *count += 1;
        *count
      }
      None => {
        self.counts.set(word, 1)?;
        1
      }
    };

    if self.max_word.as_ref().is_none_or(|(_, max)| count > *max) {
      self.max_word = Some((word.to_owned(), count));
    }

    Ok(())
  }
}

impl Default for Frequency {
  #[inline]
  fn default() -> Self {
    Self {
      counts: LpTab::new(),
      max_word: None,
    }
  }
}
