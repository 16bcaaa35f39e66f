//! In-memory syllable/word dictionary.
//!
//! Backs both lookup traits and carries the data-entry operations. Records
//! are kept in id order so lookups return id-ordered results without
//! sorting. Serializes to the JSON dictionary format of [`super::file`].

use std::collections::{BTreeMap, HashSet};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{SyllableStore, WordStore};
use crate::error::RhymeError;
use crate::language::analyze_syllable;
use crate::language::diacritics::normalize;
use crate::language::finals::{final_of, finals, find_final, RhymeFinal};
use crate::language::lomaji::{is_hanji, natural_tone_mark_index, split_hanji, split_lomaji};
use crate::rhyme::filter::SyllableFilter;
use crate::types::{
    SyllableFeatures, SyllableId, SyllableRecord, WordId, WordRecord, WordSyllable,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    syllables: Vec<SyllableRecord>,
    #[serde(default)]
    words: Vec<WordRecord>,
    #[serde(default)]
    word_syllables: Vec<WordSyllable>,
    /// Stored syllables per rhyme final, keyed by the final's spelling
    #[serde(default)]
    final_counts: BTreeMap<String, u32>,
    #[serde(default)]
    next_syllable_id: SyllableId,
    #[serde(default)]
    next_word_id: WordId,
}

/// A rhyme final with the number of stored syllables filed under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalUsage {
    #[serde(flatten)]
    pub rhyme_final: &'static RhymeFinal,
    pub data_count: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn syllables(&self) -> &[SyllableRecord] {
        &self.syllables
    }

    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn syllable(&self, id: SyllableId) -> Option<&SyllableRecord> {
        self.syllables.iter().find(|s| s.id == id)
    }

    pub fn word(&self, id: WordId) -> Option<&WordRecord> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Syllables of a word in order.
    pub fn word_syllables(&self, word_id: WordId) -> Vec<&SyllableRecord> {
        let mut links: Vec<&WordSyllable> = self
            .word_syllables
            .iter()
            .filter(|l| l.word_id == word_id)
            .collect();
        links.sort_by_key(|l| l.order);
        links
            .iter()
            .filter_map(|l| self.syllable(l.syllable_id))
            .collect()
    }

    /// Number of stored syllables rhyming on the final spelled `lomaji`.
    /// Unknown finals count zero.
    pub fn final_count(&self, lomaji: &str) -> u32 {
        find_final(lomaji)
            .and_then(|f| self.final_counts.get(f.lomaji))
            .copied()
            .unwrap_or(0)
    }

    /// The whole finals inventory with usage counts.
    pub fn final_usage(&self) -> Vec<FinalUsage> {
        finals()
            .iter()
            .map(|f| FinalUsage {
                rhyme_final: f,
                data_count: self.final_counts.get(f.lomaji).copied().unwrap_or(0),
            })
            .collect()
    }

    /// Add a syllable, or return the id of the one already stored with
    /// the same spelling and hanji.
    pub fn add_syllable(
        &mut self,
        lomaji: &str,
        hanji: Option<&str>,
    ) -> Result<SyllableId, RhymeError> {
        let lomaji = normalize(lomaji);
        if lomaji.is_empty() {
            return Err(RhymeError::MissingParameter("lomaji"));
        }
        if is_hanji(&lomaji) {
            return Err(RhymeError::InvalidWord(lomaji));
        }
        let hanji = clean_hanji(hanji);

        if let Some(existing) = self
            .syllables
            .iter()
            .find(|s| s.features.lomaji == lomaji && s.hanji == hanji)
        {
            return Ok(existing.id);
        }

        let id = self.allocate_syllable_id();
        let features = analyze_syllable(&lomaji);
        log::info!(
            "Added syllable {} {:?} (vowel {:?}, coda {:?}, tone {})",
            id,
            lomaji,
            features.vowel,
            features.coda,
            features.tone
        );
        self.count_final(&features, true);
        self.syllables.push(SyllableRecord {
            id,
            hanji,
            features,
            word_count: 0,
        });
        Ok(id)
    }

    /// Change a syllable's spelling, re-deriving its features.
    pub fn update_syllable(
        &mut self,
        id: SyllableId,
        lomaji: &str,
        hanji: Option<&str>,
    ) -> Result<(), RhymeError> {
        let lomaji = normalize(lomaji);
        if lomaji.is_empty() {
            return Err(RhymeError::MissingParameter("lomaji"));
        }
        let old = self
            .syllable(id)
            .map(|s| s.features.clone())
            .ok_or(RhymeError::UnknownSyllable(id))?;
        let features = analyze_syllable(&lomaji);
        self.count_final(&old, false);
        self.count_final(&features, true);
        if let Some(record) = self.syllables.iter_mut().find(|s| s.id == id) {
            record.features = features;
            record.hanji = clean_hanji(hanji);
        }
        log::info!("Updated syllable {} to {:?}", id, lomaji);
        Ok(())
    }

    /// Remove a syllable no word refers to.
    pub fn delete_syllable(&mut self, id: SyllableId) -> Result<(), RhymeError> {
        let record = self.syllable(id).ok_or(RhymeError::UnknownSyllable(id))?;
        if record.word_count > 0 {
            return Err(RhymeError::SyllableInUse {
                id,
                words: record.word_count,
            });
        }
        let features = record.features.clone();
        self.count_final(&features, false);
        self.syllables.retain(|s| s.id != id);
        log::info!("Deleted syllable {}", id);
        Ok(())
    }

    /// Add a word, creating any syllables it needs.
    ///
    /// Hanji characters are paired with syllables only when the counts
    /// agree.
    pub fn add_word(&mut self, lomaji: &str, hanji: Option<&str>) -> Result<WordId, RhymeError> {
        let (lomaji, parts, hanji) = self.check_word(lomaji, hanji, None)?;
        let id = self.allocate_word_id();
        let linked = self.link_syllables(id, &lomaji, &parts, hanji.as_deref())?;
        self.words.push(WordRecord {
            id,
            natural_tone_mark: natural_tone_mark_index(&lomaji),
            lomaji,
            hanji,
        });
        log::info!("Added word {} with {} syllable(s)", id, linked);
        Ok(id)
    }

    /// Respell a word and re-link its syllables. Syllables it no longer
    /// uses stay in the dictionary.
    pub fn update_word(
        &mut self,
        id: WordId,
        lomaji: &str,
        hanji: Option<&str>,
    ) -> Result<(), RhymeError> {
        if self.word(id).is_none() {
            return Err(RhymeError::UnknownWord(id));
        }
        let (lomaji, parts, hanji) = self.check_word(lomaji, hanji, Some(id))?;
        self.unlink_word(id);
        let linked = self.link_syllables(id, &lomaji, &parts, hanji.as_deref())?;
        if let Some(word) = self.words.iter_mut().find(|w| w.id == id) {
            word.natural_tone_mark = natural_tone_mark_index(&lomaji);
            word.lomaji = lomaji;
            word.hanji = hanji;
        }
        log::info!("Updated word {} with {} syllable(s)", id, linked);
        Ok(())
    }

    /// Remove a word and its syllable links. The syllables stay.
    pub fn delete_word(&mut self, id: WordId) -> Result<(), RhymeError> {
        if self.word(id).is_none() {
            return Err(RhymeError::UnknownWord(id));
        }
        self.unlink_word(id);
        self.words.retain(|w| w.id != id);
        log::info!("Deleted word {}", id);
        Ok(())
    }

    /// Re-derive features, word counts and final counts from the stored
    /// spellings and links. Run after loading data written elsewhere.
    pub fn refresh(&mut self) {
        self.syllables.sort_by_key(|s| s.id);
        self.words.sort_by_key(|w| w.id);
        for record in &mut self.syllables {
            record.features = analyze_syllable(&record.features.lomaji);
            let id = record.id;
            record.word_count = self
                .word_syllables
                .iter()
                .filter(|l| l.syllable_id == id)
                .count() as u32;
        }

        self.final_counts.clear();
        let features: Vec<SyllableFeatures> =
            self.syllables.iter().map(|s| s.features.clone()).collect();
        for f in &features {
            self.count_final(f, true);
        }

        let max_syllable = self.syllables.iter().map(|s| s.id).max().unwrap_or(0);
        self.next_syllable_id = self.next_syllable_id.max(max_syllable + 1);
        let max_word = self.words.iter().map(|w| w.id).max().unwrap_or(0);
        self.next_word_id = self.next_word_id.max(max_word + 1);
    }

    /// Normalize and validate a word spelling. `replacing` is the word
    /// being respelled, which may keep its own spelling.
    fn check_word(
        &self,
        lomaji: &str,
        hanji: Option<&str>,
        replacing: Option<WordId>,
    ) -> Result<(String, Vec<String>, Option<String>), RhymeError> {
        let lomaji = normalize(lomaji);
        if lomaji.is_empty() {
            return Err(RhymeError::MissingParameter("lomaji"));
        }
        if is_hanji(&lomaji) {
            return Err(RhymeError::InvalidWord(lomaji));
        }
        let parts = split_lomaji(&lomaji);
        if parts.is_empty() {
            return Err(RhymeError::InvalidWord(lomaji));
        }
        let hanji = clean_hanji(hanji);
        if self
            .words
            .iter()
            .any(|w| Some(w.id) != replacing && w.lomaji == lomaji && w.hanji == hanji)
        {
            return Err(RhymeError::DuplicateWord(lomaji));
        }
        Ok((lomaji, parts, hanji))
    }

    /// Link `parts` to the word in order, creating syllables as needed.
    fn link_syllables(
        &mut self,
        word_id: WordId,
        lomaji: &str,
        parts: &[String],
        hanji: Option<&str>,
    ) -> Result<usize, RhymeError> {
        let characters = hanji.map(split_hanji).unwrap_or_default();
        let paired = characters.len() == parts.len();
        if hanji.is_some() && !paired {
            log::warn!(
                "{:?}: {} hanji for {} syllables, storing syllables without hanji",
                lomaji,
                characters.len(),
                parts.len()
            );
        }

        let mut syllable_ids = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let character = if paired { Some(characters[i].as_str()) } else { None };
            syllable_ids.push(self.add_syllable(part, character)?);
        }

        for (order, syllable_id) in syllable_ids.iter().enumerate() {
            self.word_syllables.push(WordSyllable {
                word_id,
                syllable_id: *syllable_id,
                order: order as u32,
            });
            if let Some(record) = self.syllables.iter_mut().find(|s| s.id == *syllable_id) {
                record.word_count += 1;
            }
        }
        Ok(syllable_ids.len())
    }

    /// Drop a word's links, releasing its syllables.
    fn unlink_word(&mut self, word_id: WordId) {
        let (removed, kept): (Vec<WordSyllable>, Vec<WordSyllable>) =
            std::mem::take(&mut self.word_syllables)
                .into_iter()
                .partition(|l| l.word_id == word_id);
        self.word_syllables = kept;
        for link in removed {
            if let Some(record) = self.syllables.iter_mut().find(|s| s.id == link.syllable_id) {
                record.word_count = record.word_count.saturating_sub(1);
            }
        }
    }

    fn count_final(&mut self, features: &SyllableFeatures, added: bool) {
        let Some(rhyme_final) = final_of(features) else {
            return;
        };
        let count = self
            .final_counts
            .entry(rhyme_final.lomaji.to_string())
            .or_insert(0);
        if added {
            *count += 1;
        } else {
            *count = count.saturating_sub(1);
        }
    }

    fn allocate_syllable_id(&mut self) -> SyllableId {
        let id = self.next_syllable_id.max(1);
        self.next_syllable_id = id + 1;
        id
    }

    fn allocate_word_id(&mut self) -> WordId {
        let id = self.next_word_id.max(1);
        self.next_word_id = id + 1;
        id
    }
}

fn clean_hanji(hanji: Option<&str>) -> Option<String> {
    hanji.map(str::trim).filter(|h| !h.is_empty()).map(str::to_string)
}

impl SyllableStore for MemoryStore {
    fn find_syllables(
        &self,
        filter: &SyllableFilter,
        limit: Option<usize>,
        offset: usize,
    ) -> Result<Vec<SyllableRecord>> {
        Ok(self
            .syllables
            .iter()
            .filter(|s| filter.matches(&s.features))
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    fn count_syllables(&self, filter: &SyllableFilter) -> Result<usize> {
        Ok(self
            .syllables
            .iter()
            .filter(|s| filter.matches(&s.features))
            .count())
    }
}

impl WordStore for MemoryStore {
    fn find_word_syllables(
        &self,
        syllable_ids: &HashSet<SyllableId>,
        within: Option<&HashSet<WordId>>,
    ) -> Result<Vec<WordSyllable>> {
        Ok(self
            .word_syllables
            .iter()
            .filter(|l| syllable_ids.contains(&l.syllable_id))
            .filter(|l| within.map_or(true, |w| w.contains(&l.word_id)))
            .copied()
            .collect())
    }

    fn max_order(&self, word_id: WordId) -> Result<Option<u32>> {
        Ok(self
            .word_syllables
            .iter()
            .filter(|l| l.word_id == word_id)
            .map(|l| l.order)
            .max())
    }

    fn words_by_ids(&self, ids: &HashSet<WordId>) -> Result<Vec<WordRecord>> {
        Ok(self
            .words
            .iter()
            .filter(|w| ids.contains(&w.id))
            .cloned()
            .collect())
    }

    fn find_word(
        &self,
        lomaji: &str,
        hanji: Option<&str>,
    ) -> Result<Option<(WordRecord, Vec<SyllableRecord>)>> {
        let lomaji = normalize(lomaji);
        let hanji = clean_hanji(hanji);
        let found = self
            .words
            .iter()
            .find(|w| w.lomaji == lomaji && (hanji.is_none() || w.hanji == hanji));
        Ok(found.map(|word| {
            let syllables = self.word_syllables(word.id).into_iter().cloned().collect();
            (word.clone(), syllables)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhyme::filter::FeatureFilter;

    fn assert_counts_consistent(store: &MemoryStore) {
        for s in store.syllables() {
            let links = store
                .word_syllables
                .iter()
                .filter(|l| l.syllable_id == s.id)
                .count() as u32;
            assert_eq!(s.word_count, links, "word_count of {}", s.features.lomaji);
        }
        for usage in store.final_usage() {
            let filed = store
                .syllables()
                .iter()
                .filter(|s| final_of(&s.features) == Some(usage.rhyme_final))
                .count() as u32;
            assert_eq!(usage.data_count, filed, "data_count of {}", usage.rhyme_final.lomaji);
        }
    }

    #[test]
    fn test_add_syllable_derives_features() {
        let mut store = MemoryStore::new();
        let id = store.add_syllable("Kâng", Some("同")).unwrap();
        let s = store.syllable(id).unwrap();
        assert_eq!(s.features.lomaji, "kâng");
        assert_eq!(s.features.vowel, "a");
        assert_eq!(s.features.coda.as_deref(), Some("ng"));
        assert_eq!(s.features.tone, 5);
        assert_eq!(s.hanji.as_deref(), Some("同"));
    }

    #[test]
    fn test_add_syllable_dedupes() {
        let mut store = MemoryStore::new();
        let a = store.add_syllable("kang", None).unwrap();
        let b = store.add_syllable(" KANG ", None).unwrap();
        let c = store.add_syllable("kang", Some("工")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(store.syllables().len(), 2);
    }

    #[test]
    fn test_add_syllable_rejects_bad_input() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.add_syllable("  ", None),
            Err(RhymeError::MissingParameter(_))
        ));
        assert!(matches!(
            store.add_syllable("人", None),
            Err(RhymeError::InvalidWord(_))
        ));
    }

    #[test]
    fn test_add_word_links_in_order() {
        let mut store = MemoryStore::new();
        let id = store.add_word("Tâi-oân", Some("臺灣")).unwrap();
        let syllables = store.word_syllables(id);
        let names: Vec<&str> = syllables.iter().map(|s| s.features.lomaji.as_str()).collect();
        assert_eq!(names, vec!["tâi", "oân"]);
        assert_eq!(syllables[0].hanji.as_deref(), Some("臺"));
        assert_eq!(syllables[1].hanji.as_deref(), Some("灣"));
        assert_eq!(store.max_order(id).unwrap(), Some(1));
        assert_counts_consistent(&store);
    }

    #[test]
    fn test_add_word_unpaired_hanji() {
        let mut store = MemoryStore::new();
        let id = store.add_word("tâi-oân-lâng", Some("臺灣")).unwrap();
        assert!(store.word_syllables(id).iter().all(|s| s.hanji.is_none()));
        assert_eq!(store.word(id).unwrap().hanji.as_deref(), Some("臺灣"));
    }

    #[test]
    fn test_add_word_natural_tone_mark() {
        let mut store = MemoryStore::new();
        let id = store.add_word("hó-sè--ê", None).unwrap();
        assert_eq!(store.word(id).unwrap().natural_tone_mark, Some("hó-sè".len()));
        assert_eq!(store.word_syllables(id).len(), 3);
    }

    #[test]
    fn test_add_word_rejections() {
        let mut store = MemoryStore::new();
        store.add_word("tâi-oân", None).unwrap();
        assert!(matches!(
            store.add_word("Tâi-oân", None),
            Err(RhymeError::DuplicateWord(_))
        ));
        assert!(matches!(store.add_word("臺灣", None), Err(RhymeError::InvalidWord(_))));
        assert!(matches!(store.add_word(" - ", None), Err(RhymeError::InvalidWord(_))));
        assert!(matches!(store.add_word("", None), Err(RhymeError::MissingParameter(_))));
        // same spelling with different hanji is a different word
        assert!(store.add_word("tâi-oân", Some("臺灣")).is_ok());
    }

    #[test]
    fn test_shared_syllables_count_every_link() {
        let mut store = MemoryStore::new();
        store.add_word("ka-ka", None).unwrap();
        store.add_word("ka-pi", None).unwrap();
        let ka = store.add_syllable("ka", None).unwrap();
        assert_eq!(store.syllable(ka).unwrap().word_count, 3);
        assert_counts_consistent(&store);
    }

    #[test]
    fn test_update_word_relinks() {
        let mut store = MemoryStore::new();
        let id = store.add_word("ka-pi", None).unwrap();
        store.update_word(id, "Pi-pa--to", Some("琵琶桃")).unwrap();

        let word = store.word(id).unwrap();
        assert_eq!(word.lomaji, "pi-pa--to");
        assert_eq!(word.hanji.as_deref(), Some("琵琶桃"));
        assert_eq!(word.natural_tone_mark, Some("pi-pa".len()));

        let syllables = store.word_syllables(id);
        let names: Vec<&str> = syllables.iter().map(|s| s.features.lomaji.as_str()).collect();
        assert_eq!(names, vec!["pi", "pa", "to"]);
        assert_eq!(syllables[1].hanji.as_deref(), Some("琶"));
        assert_eq!(store.max_order(id).unwrap(), Some(2));

        // the old pi had no hanji and is no longer linked
        let ka = store.syllables().iter().find(|s| s.features.lomaji == "ka").unwrap();
        assert_eq!(ka.word_count, 0);
        assert_counts_consistent(&store);
    }

    #[test]
    fn test_update_word_rejections_leave_word_intact() {
        let mut store = MemoryStore::new();
        let first = store.add_word("ka-pi", None).unwrap();
        store.add_word("si-chiam", None).unwrap();

        assert!(matches!(
            store.update_word(first, "si-chiam", None),
            Err(RhymeError::DuplicateWord(_))
        ));
        assert!(matches!(
            store.update_word(first, "臺灣", None),
            Err(RhymeError::InvalidWord(_))
        ));
        assert!(matches!(
            store.update_word(42, "ka", None),
            Err(RhymeError::UnknownWord(42))
        ));
        assert_eq!(store.word(first).unwrap().lomaji, "ka-pi");
        assert_eq!(store.word_syllables(first).len(), 2);
        assert_counts_consistent(&store);

        // keeping its own spelling is not a duplicate
        assert!(store.update_word(first, "ka-pi", Some("咖啡")).is_ok());
        assert_counts_consistent(&store);
    }

    #[test]
    fn test_delete_word_releases_syllables() {
        let mut store = MemoryStore::new();
        let w1 = store.add_word("ka-pi", None).unwrap();
        let w2 = store.add_word("pi-pa", None).unwrap();
        store.delete_word(w1).unwrap();
        assert_counts_consistent(&store);

        let pi = store.add_syllable("pi", None).unwrap();
        let ka = store.add_syllable("ka", None).unwrap();
        assert_eq!(store.syllable(pi).unwrap().word_count, 1);
        assert!(store.delete_syllable(ka).is_ok());
        assert!(matches!(
            store.delete_syllable(pi),
            Err(RhymeError::SyllableInUse { words: 1, .. })
        ));

        store.delete_word(w2).unwrap();
        assert!(store.delete_syllable(pi).is_ok());
        assert!(matches!(store.delete_word(w2), Err(RhymeError::UnknownWord(_))));
        assert_counts_consistent(&store);
    }

    #[test]
    fn test_update_syllable_rederives() {
        let mut store = MemoryStore::new();
        let id = store.add_syllable("kang", None).unwrap();
        store.update_syllable(id, "kap", Some("合")).unwrap();
        let s = store.syllable(id).unwrap();
        assert_eq!(s.features.coda.as_deref(), Some("p"));
        assert_eq!(s.features.tone, 4);
        assert!(matches!(
            store.update_syllable(99, "a", None),
            Err(RhymeError::UnknownSyllable(99))
        ));
    }

    #[test]
    fn test_final_counts_follow_syllables() {
        let mut store = MemoryStore::new();
        store.add_syllable("kang", None).unwrap();
        let pang = store.add_syllable("pâng", None).unwrap();
        let kap = store.add_syllable("kap", None).unwrap();
        store.add_syllable("sìⁿ", None).unwrap();
        assert_eq!(store.final_count("ang"), 2);
        assert_eq!(store.final_count("ap"), 1);
        assert_eq!(store.final_count("am"), 0);

        store.update_syllable(kap, "kam", None).unwrap();
        assert_eq!(store.final_count("ap"), 0);
        assert_eq!(store.final_count("am"), 1);

        store.delete_syllable(pang).unwrap();
        assert_eq!(store.final_count("ang"), 1);
        assert_eq!(store.final_count("xyz"), 0);
        assert_counts_consistent(&store);

        let usage = store.final_usage();
        assert_eq!(usage.len(), finals().len());
        let am = usage.iter().find(|u| u.rhyme_final.lomaji == "am").unwrap();
        let v = serde_json::to_value(am).unwrap();
        assert_eq!(v["lomaji"], "am");
        assert_eq!(v["hanji"], "掩");
        assert_eq!(v["data_count"], 1);
    }

    #[test]
    fn test_find_syllables_paginates_in_id_order() {
        let mut store = MemoryStore::new();
        for s in ["ka", "kang", "pa", "ta", "sa"] {
            store.add_syllable(s, None).unwrap();
        }
        let filter = SyllableFilter {
            vowel: FeatureFilter::Is("a".into()),
            coda: FeatureFilter::Is(None),
            ..Default::default()
        };
        assert_eq!(store.count_syllables(&filter).unwrap(), 4);
        let page: Vec<String> = store
            .find_syllables(&filter, Some(2), 1)
            .unwrap()
            .into_iter()
            .map(|s| s.features.lomaji)
            .collect();
        assert_eq!(page, vec!["pa", "ta"]);
    }

    #[test]
    fn test_find_word_syllables_within() {
        let mut store = MemoryStore::new();
        let w1 = store.add_word("ka-pi", None).unwrap();
        store.add_word("pi-ka", None).unwrap();
        let pi = store.add_syllable("pi", None).unwrap();

        let ids: HashSet<SyllableId> = [pi].into_iter().collect();
        assert_eq!(store.find_word_syllables(&ids, None).unwrap().len(), 2);
        let within: HashSet<WordId> = [w1].into_iter().collect();
        let hits = store.find_word_syllables(&ids, Some(&within)).unwrap();
        assert_eq!(
            hits,
            vec![WordSyllable { word_id: w1, syllable_id: pi, order: 1 }]
        );
    }

    #[test]
    fn test_find_word_by_spelling() {
        let mut store = MemoryStore::new();
        store.add_word("tâi-oân", Some("臺灣")).unwrap();
        let (word, syllables) = store.find_word("Tâi-oân", None).unwrap().unwrap();
        assert_eq!(word.hanji.as_deref(), Some("臺灣"));
        assert_eq!(syllables.len(), 2);
        assert!(store.find_word("tâi-oân", Some("台灣")).unwrap().is_none());
        assert!(store.max_order(999).unwrap().is_none());
    }

    #[test]
    fn test_refresh_rebuilds_derived_fields() {
        let mut store = MemoryStore::new();
        store.add_word("ka-pi", None).unwrap();
        let json = serde_json::to_string(&store).unwrap();
        let tampered = json
            .replace("\"word_count\":1", "\"word_count\":7")
            .replace("\"tone\":1", "\"tone\":9")
            .replace("\"final_counts\":{", "\"final_counts\":{\"ong\":5,");
        let mut loaded: MemoryStore = serde_json::from_str(&tampered).unwrap();
        loaded.refresh();
        assert!(loaded
            .syllables()
            .iter()
            .all(|s| s.word_count == 1 && s.features.tone == 1));
        assert_eq!(loaded.final_count("ong"), 0);
        assert_eq!(loaded.final_count("a"), 1);
        assert_counts_consistent(&loaded);
        let next = loaded.add_syllable("pa", None).unwrap();
        assert_eq!(next, 3);
    }
}
