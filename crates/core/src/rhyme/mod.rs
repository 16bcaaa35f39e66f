//! Rhyme search.
//!
//! [`similarity`] expands a syllable's features into a [`filter::SyllableFilter`],
//! [`syllable`] runs it against a store and [`word`] chains per-syllable
//! searches into whole-word matches.

pub mod filter;
pub mod options;
pub mod similarity;
pub mod syllable;
pub mod word;

pub use syllable::{find_rhyming_syllables, SyllableQuery, SyllableRhymes};
pub use word::{
    find_rhyming_words, find_rhyming_words_by_input, find_rhyming_words_by_word, RhymeTarget,
    WordRhymes,
};
