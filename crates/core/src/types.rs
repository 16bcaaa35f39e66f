use serde::{Deserialize, Serialize};

/// Identifier of a stored syllable.
pub type SyllableId = u32;

/// Identifier of a stored word.
pub type WordId = u32;

/// Decomposition of one romanized syllable.
///
/// Always derived from `lomaji`; recompute it rather than editing fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyllableFeatures {
    /// Surface spelling (NFC, lowercased)
    pub lomaji: String,
    /// Initial consonant, empty when there is none
    pub consonant: String,
    /// Vowel nucleus, empty when segmentation failed
    pub vowel: String,
    /// Final consonant
    pub coda: Option<String>,
    pub nasal: bool,
    /// Tone number 1-9
    pub tone: u8,
}

impl SyllableFeatures {
    /// True if the syllable produced a vowel nucleus.
    pub fn is_resolved(&self) -> bool {
        !self.vowel.is_empty()
    }
}

/// A syllable as kept by a store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyllableRecord {
    pub id: SyllableId,
    /// Logographic spelling, if known
    #[serde(default)]
    pub hanji: Option<String>,
    #[serde(flatten)]
    pub features: SyllableFeatures,
    /// Number of word links pointing at this syllable
    #[serde(default)]
    pub word_count: u32,
}

/// A stored multi-syllable word.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordRecord {
    pub id: WordId,
    pub lomaji: String,
    #[serde(default)]
    pub hanji: Option<String>,
    /// Byte index of the neutral-tone marker (`--`), if any
    #[serde(default)]
    pub natural_tone_mark: Option<usize>,
}

/// Membership of a syllable in a word.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordSyllable {
    pub word_id: WordId,
    pub syllable_id: SyllableId,
    /// Zero-based position within the word
    pub order: u32,
}
