//! Tone diacritics: variant tables and tone stripping.
//!
//! Each toneable letter has nine slots indexed by tone-mark position.
//! Slots 0 and 3 hold the bare letter (no mark, checked tone).

use unicode_normalization::UnicodeNormalization;

/// Superscript n marking a nasalized vowel.
pub const NASAL_MARK: char = 'ⁿ';

/// Dot above right distinguishing `o͘` from `o`.
pub const O_DOT: char = '\u{358}';

/// Combining tone marks by slot.
pub const TONE_MARKS: [&str; 9] = [
    "",         // 0: unmarked
    "\u{301}",  // 1: acute
    "\u{300}",  // 2: grave
    "",         // 3: checked, unmarked
    "\u{302}",  // 4: circumflex
    "\u{30C}",  // 5: caron
    "\u{304}",  // 6: macron
    "\u{30D}",  // 7: vertical line above
    "\u{306}",  // 8: breve
];

/// Letters that carry tone marks, in scan order.
pub const TONEABLE_LETTERS: [&str; 8] = ["a", "i", "u", "o\u{358}", "e", "o", "n", "m"];

lazy_static::lazy_static! {
    /// `(base, variants)` for every toneable letter, all NFC.
    pub static ref TONED_LETTERS: Vec<(&'static str, [String; 9])> = TONEABLE_LETTERS
        .iter()
        .map(|base| (*base, std::array::from_fn(|slot| toned(base, TONE_MARKS[slot]))))
        .collect();
}

/// Put `mark` on the first letter of `base` and compose.
fn toned(base: &str, mark: &str) -> String {
    let mut chars = base.chars();
    let mut out = String::new();
    if let Some(first) = chars.next() {
        out.push(first);
    }
    out.push_str(mark);
    out.extend(chars);
    out.nfc().collect()
}

/// Canonical form used by every analysis entry point: trimmed, NFC, lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().nfc().collect::<String>().to_lowercase()
}

/// Replace every tone-marked letter with its bare letter.
///
/// Malformed input with several marks has all of them removed.
pub fn strip_tone(syllable: &str) -> String {
    let mut clean = normalize(syllable);
    for (base, variants) in TONED_LETTERS.iter() {
        for variant in variants.iter().skip(1) {
            if variant.as_str() != *base && clean.contains(variant.as_str()) {
                clean = clean.replace(variant.as_str(), base);
            }
        }
    }
    clean
}
