//! Multi-syllable word rhyme search.
//!
//! The last N syllables of the target are matched from the end of the
//! word backward. Each pass narrows the candidate words to those holding
//! a rhyming syllable at the same distance from their own last syllable,
//! so words of different lengths line up at the end.

use std::collections::{HashMap, HashSet};

use crate::error::RhymeError;
use crate::language::{analyze_text, diacritics::normalize};
use crate::rhyme::options::RhymeOptions;
use crate::rhyme::syllable::{find_rhyming_syllables, SyllableQuery};
use crate::store::{SyllableStore, WordStore};
use crate::types::{SyllableFeatures, SyllableId, WordId, WordRecord};

/// Message of an empty word search.
pub const NO_WORD_RHYMES: &str = "No rhyming words found matching the criteria.";

/// Message when the target word is not stored.
pub const NO_MATCHING_WORD: &str = "No matching word found.";

/// The word to find rhymes for.
#[derive(Debug, Clone, PartialEq)]
pub struct RhymeTarget {
    pub lomaji: String,
    /// Set when the target is a stored word
    pub word_id: Option<WordId>,
    /// Syllables in word order
    pub syllables: Vec<SyllableFeatures>,
}

impl RhymeTarget {
    /// Target built from typed-in lomaji.
    pub fn from_lomaji(lomaji: &str) -> Self {
        Self {
            lomaji: lomaji.trim().to_string(),
            word_id: None,
            syllables: analyze_text(lomaji),
        }
    }

    fn is_same_word(&self, word: &WordRecord) -> bool {
        self.word_id == Some(word.id) || normalize(&word.lomaji) == normalize(&self.lomaji)
    }
}

/// Outcome of a word search.
#[derive(Debug, Clone, PartialEq)]
pub enum WordRhymes {
    Found { data: Vec<WordRecord> },
    NotFound { message: String },
}

impl WordRhymes {
    fn not_found(message: &str) -> Self {
        WordRhymes::NotFound { message: message.to_string() }
    }

    pub fn words(&self) -> &[WordRecord] {
        match self {
            WordRhymes::Found { data } => data,
            WordRhymes::NotFound { .. } => &[],
        }
    }

    /// Serialize for JSON output.
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            WordRhymes::Found { data } => serde_json::json!({
                "successful": true,
                "count": data.len(),
                "data": data,
            }),
            WordRhymes::NotFound { message } => serde_json::json!({
                "message": message,
                "successful": false,
            }),
        }
    }
}

/// Find stored words whose last `rhyming_count` syllables rhyme with
/// the target's, excluding the target itself.
pub fn find_rhyming_words<S>(
    store: &S,
    target: &RhymeTarget,
    rhyming_count: usize,
    opts: &RhymeOptions,
) -> Result<WordRhymes, RhymeError>
where
    S: SyllableStore + WordStore + ?Sized,
{
    if target.syllables.is_empty() {
        return Err(RhymeError::MissingParameter("lomaji"));
    }
    let total = target.syllables.len();
    if rhyming_count < 1 || rhyming_count > total {
        return Err(RhymeError::SyllableCountOutOfRange {
            requested: rhyming_count,
            available: total,
        });
    }

    let first = total - rhyming_count;
    let rhyming = &target.syllables[first..];
    if let Some((i, bad)) = rhyming.iter().enumerate().find(|(_, s)| !s.is_resolved()) {
        return Err(RhymeError::UnresolvedSyllable {
            position: first + i + 1,
            lomaji: bad.lomaji.clone(),
        });
    }

    log::debug!(
        "Word rhyme search: {:?}, {} syllable(s), {:?}",
        target.lomaji,
        rhyming_count,
        opts
    );

    let mut candidates: Option<HashSet<WordId>> = None;
    for (i, syllable) in rhyming.iter().enumerate().rev() {
        let relative_order = i as i64 - (rhyming_count as i64 - 1);

        let query = SyllableQuery::from_features(syllable);
        let rhymes = find_rhyming_syllables(store, &query, opts)?;
        let syllable_ids = rhymes.ids();
        log::debug!(
            "  {} ({}/{}): {} rhyming syllable(s), {} candidate word(s) before",
            syllable.lomaji,
            i + 1,
            rhyming_count,
            syllable_ids.len(),
            candidates.as_ref().map(|c| c.len()).unwrap_or(0)
        );

        if syllable_ids.is_empty() {
            return Ok(WordRhymes::not_found(NO_WORD_RHYMES));
        }
        let survivors =
            words_at_relative_order(store, &syllable_ids, candidates.as_ref(), relative_order)?;
        log::debug!("  {} word(s) remain", survivors.len());
        if survivors.is_empty() {
            return Ok(WordRhymes::not_found(NO_WORD_RHYMES));
        }
        candidates = Some(survivors);
    }

    let candidates = candidates.unwrap_or_default();
    let data: Vec<WordRecord> = store
        .words_by_ids(&candidates)?
        .into_iter()
        .filter(|w| !target.is_same_word(w))
        .collect();

    if data.is_empty() {
        Ok(WordRhymes::not_found(NO_WORD_RHYMES))
    } else {
        Ok(WordRhymes::Found { data })
    }
}

/// Words holding one of `syllable_ids` at `max_order + relative_order`.
fn words_at_relative_order<S: WordStore + ?Sized>(
    store: &S,
    syllable_ids: &HashSet<SyllableId>,
    within: Option<&HashSet<WordId>>,
    relative_order: i64,
) -> anyhow::Result<HashSet<WordId>> {
    let mut orders_by_word: HashMap<WordId, Vec<u32>> = HashMap::new();
    for occurrence in store.find_word_syllables(syllable_ids, within)? {
        orders_by_word
            .entry(occurrence.word_id)
            .or_default()
            .push(occurrence.order);
    }

    let mut survivors = HashSet::new();
    for (word_id, orders) in orders_by_word {
        let Some(max_order) = store.max_order(word_id)? else {
            continue;
        };
        let wanted = max_order as i64 + relative_order;
        if wanted >= 0 && orders.contains(&(wanted as u32)) {
            survivors.insert(word_id);
        }
    }
    Ok(survivors)
}

/// Rhymes for typed-in lomaji. Stored words with the same spelling are
/// excluded.
pub fn find_rhyming_words_by_input<S>(
    store: &S,
    lomaji: &str,
    rhyming_count: usize,
    opts: &RhymeOptions,
) -> Result<WordRhymes, RhymeError>
where
    S: SyllableStore + WordStore + ?Sized,
{
    if lomaji.trim().is_empty() {
        return Err(RhymeError::MissingParameter("lomaji"));
    }
    find_rhyming_words(store, &RhymeTarget::from_lomaji(lomaji), rhyming_count, opts)
}

/// Rhymes for a stored word, using its stored syllables.
pub fn find_rhyming_words_by_word<S>(
    store: &S,
    lomaji: &str,
    hanji: Option<&str>,
    rhyming_count: usize,
    opts: &RhymeOptions,
) -> Result<WordRhymes, RhymeError>
where
    S: SyllableStore + WordStore + ?Sized,
{
    if lomaji.trim().is_empty() {
        return Err(RhymeError::MissingParameter("lomaji"));
    }
    let Some((word, syllables)) = store.find_word(lomaji, hanji)? else {
        return Ok(WordRhymes::not_found(NO_MATCHING_WORD));
    };
    let target = RhymeTarget {
        lomaji: word.lomaji,
        word_id: Some(word.id),
        syllables: syllables.into_iter().map(|s| s.features).collect(),
    };
    find_rhyming_words(store, &target, rhyming_count, opts)
}
