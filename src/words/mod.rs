//! Word-level collaborators built on [`LpTab`].
//!
//! [`Dictionary`] is a set of known words; [`Frequency`] counts occurrences
//! and classifies words by how common they are. Both read from any
//! [`BufRead`] source and lowercase every word they store.
//!
//! [`BufRead`]: std::io::BufRead
//! [`LpTab`]: crate::LpTab

mod dictionary;
mod frequency;

pub use self::dictionary::Dictionary;
pub use self::dictionary::LoadError;
pub use self::dictionary::LoadReport;
pub use self::frequency::CountError;
pub use self::frequency::Frequency;
pub use self::frequency::Rarity;
