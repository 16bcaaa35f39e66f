//! Tone classification from diacritics and syllable shape.

use super::diacritics::{normalize, TONED_LETTERS};

/// Tone number for each diacritic slot. Slots 0 and 3 are unmarked and
/// slot 5 is not assigned; those tones come from the fallback rules.
const TONE_BY_SLOT: [Option<u8>; 9] = [
    None,
    Some(2),
    Some(3),
    None,
    Some(5),
    None,
    Some(7),
    Some(8),
    Some(9),
];

/// Stop and glottal codas of the checked (entering) tones.
const CHECKED_CODAS: [char; 4] = ['p', 't', 'k', 'h'];

/// Tone of an unmarked open or nasal syllable.
pub const DEFAULT_TONE: u8 = 1;

/// Checked endings of nasalized syllables (POJ `hⁿ`, Tâi-lô style `ⁿh`).
const NASAL_CHECKED_ENDINGS: [&str; 2] = ["h\u{207F}", "\u{207F}h"];

/// Unmarked checked tone.
pub const CHECKED_TONE: u8 = 4;

/// Classify the tone (1-9) of a raw, diacritic-bearing syllable.
///
/// An explicit tone mark wins. Otherwise a nasalized checked ending
/// (`hⁿ` or `ⁿh`) or a final `p`/`t`/`k`/`h` gives tone 4, and every
/// other syllable, nasal or not, gets tone 1.
pub fn tone(syllable: &str) -> u8 {
    let raw = normalize(syllable);
    if let Some(marked) = marked_tone(&raw) {
        return marked;
    }

    if NASAL_CHECKED_ENDINGS.iter().any(|ending| raw.ends_with(ending)) {
        return CHECKED_TONE;
    }
    if raw.ends_with(CHECKED_CODAS) {
        return CHECKED_TONE;
    }

    // Nasal codas (m, n, ng), the nasal mark and open syllables all
    // fall through to the default.
    DEFAULT_TONE
}

/// Tone given by the first tone-marked letter found, if any.
fn marked_tone(raw: &str) -> Option<u8> {
    for (_, variants) in TONED_LETTERS.iter() {
        for (slot, variant) in variants.iter().enumerate().skip(1) {
            if let Some(tone) = TONE_BY_SLOT[slot] {
                if raw.contains(variant.as_str()) {
                    return Some(tone);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_tones() {
        assert_eq!(tone("á"), 2);
        assert_eq!(tone("à"), 3);
        assert_eq!(tone("â"), 5);
        assert_eq!(tone("ā"), 7);
        assert_eq!(tone("a̍h"), 8);
        assert_eq!(tone("ă"), 9);
    }

    #[test]
    fn test_marked_tones_other_letters() {
        assert_eq!(tone("chhiú"), 2);
        assert_eq!(tone("kòe"), 3);
        assert_eq!(tone("tōng"), 7);
        assert_eq!(tone("hó͘"), 2);
        assert_eq!(tone("ḿ"), 2);
        assert_eq!(tone("m̄"), 7);
        assert_eq!(tone("n̂g"), 5);
        assert_eq!(tone("ǹg"), 3);
    }

    #[test]
    fn test_decomposed_marks() {
        assert_eq!(tone("a\u{301}ng"), 2);
        assert_eq!(tone("A\u{300}"), 3);
    }

    #[test]
    fn test_caron_slot_unassigned() {
        assert_eq!(tone("ǎ"), DEFAULT_TONE);
    }

    #[test]
    fn test_checked_tone() {
        for s in ["ah", "kok", "sip", "bat", "tiap", "mh", "ngh"] {
            assert_eq!(tone(s), CHECKED_TONE, "{}", s);
        }
    }

    #[test]
    fn test_nasal_checked_tone() {
        assert_eq!(tone("hahⁿ"), CHECKED_TONE);
        assert_eq!(tone("haⁿh"), CHECKED_TONE);
    }

    #[test]
    fn test_checked_beats_nasal_default() {
        // nasal mark elsewhere, final h
        assert_eq!(tone("siⁿh"), CHECKED_TONE);
        assert_eq!(tone("mih"), CHECKED_TONE);
    }

    #[test]
    fn test_default_tone() {
        for s in ["a", "ang", "kam", "sin", "siⁿ", "m", "ng", ""] {
            assert_eq!(tone(s), DEFAULT_TONE, "{}", s);
        }
    }
}
