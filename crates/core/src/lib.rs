//! Phonological analysis and rhyme search for Hō-lô romanization (lomaji).
//!
//! `language` decomposes a syllable into consonant, vowel, coda, nasal
//! and tone. `rhyme` turns those features into store filters and chains
//! them into whole-word rhyme searches. `store` defines the lookups the
//! search needs and ships an in-memory implementation.

pub mod error;
pub mod language;
pub mod rhyme;
pub mod store;
pub mod types;

pub use error::RhymeError;
pub use language::analyze_syllable;
pub use rhyme::options::RhymeOptions;
pub use types::{SyllableFeatures, SyllableRecord, WordRecord, WordSyllable};
