//! Lomaji phonology: tone stripping, segmentation, tone classification
//! and the inventory of rhyme finals.

pub mod diacritics;
pub mod finals;
pub mod lomaji;
pub mod segment;
pub mod tone;

use crate::types::SyllableFeatures;

/// Decompose one syllable into its feature tuple.
///
/// Pure and repeatable: the same spelling always yields the same
/// features. Unparseable input yields an empty vowel rather than an
/// error; check [`SyllableFeatures::is_resolved`].
pub fn analyze_syllable(syllable: &str) -> SyllableFeatures {
    let segments = segment::segment(syllable);
    SyllableFeatures {
        lomaji: diacritics::normalize(syllable),
        consonant: segments.consonant,
        vowel: segments.vowel,
        coda: segments.coda,
        nasal: segments.nasal,
        tone: tone::tone(syllable),
    }
}

/// Analyze every syllable of a word or phrase, in order.
pub fn analyze_text(text: &str) -> Vec<SyllableFeatures> {
    lomaji::split_lomaji(text)
        .iter()
        .map(|s| analyze_syllable(s))
        .collect()
}
