//! Lookups the rhyme search needs from a syllable/word store.
//!
//! The search never owns persistence: anything that can answer these
//! queries (a database, the in-memory [`memory::MemoryStore`]) can back it.

pub mod file;
pub mod memory;

use std::collections::HashSet;

use anyhow::Result;

use crate::rhyme::filter::SyllableFilter;
use crate::types::{SyllableId, SyllableRecord, WordId, WordRecord, WordSyllable};

/// Feature-filtered syllable lookup.
pub trait SyllableStore: Send + Sync {
    /// Syllables matching `filter`, ordered by id, skipping `offset`
    /// and returning at most `limit` when given.
    fn find_syllables(
        &self,
        filter: &SyllableFilter,
        limit: Option<usize>,
        offset: usize,
    ) -> Result<Vec<SyllableRecord>>;

    /// Number of syllables matching `filter`, ignoring pagination.
    fn count_syllables(&self, filter: &SyllableFilter) -> Result<usize>;
}

/// Word-syllable membership lookups.
pub trait WordStore: Send + Sync {
    /// Occurrences of any of `syllable_ids`, restricted to `within`
    /// when given.
    fn find_word_syllables(
        &self,
        syllable_ids: &HashSet<SyllableId>,
        within: Option<&HashSet<WordId>>,
    ) -> Result<Vec<WordSyllable>>;

    /// Highest order used by a word (length - 1), `None` if it has no syllables.
    fn max_order(&self, word_id: WordId) -> Result<Option<u32>>;

    /// Word records for `ids`, ordered by id. Unknown ids are skipped.
    fn words_by_ids(&self, ids: &HashSet<WordId>) -> Result<Vec<WordRecord>>;

    /// A stored word by spelling, with its syllables in order.
    fn find_word(
        &self,
        lomaji: &str,
        hanji: Option<&str>,
    ) -> Result<Option<(WordRecord, Vec<SyllableRecord>)>>;
}
