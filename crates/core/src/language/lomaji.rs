//! Splitting words and phrases into syllables.

/// Separators between lomaji syllables.
const LOMAJI_SEPARATORS: [char; 8] = ['-', '.', ',', ';', '?', '!', '–', '—'];

/// Hanji punctuation dropped before splitting into characters.
const HANJI_PUNCTUATION: [char; 10] = ['，', '。', '！', '？', '；', '：', '「', '」', '…', '—'];

/// Split romanized text into lowercase syllables.
///
/// Hyphens, dashes and sentence punctuation all separate syllables.
pub fn split_lomaji(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if LOMAJI_SEPARATORS.contains(&c) { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split hanji into characters, dropping punctuation.
///
/// Works on scalar values, so characters outside the BMP stay whole.
pub fn split_hanji(text: &str) -> Vec<String> {
    text.chars()
        .filter(|c| !HANJI_PUNCTUATION.contains(c) && !c.is_whitespace())
        .map(String::from)
        .collect()
}

/// Byte index of the neutral-tone marker: `--`, then `．`, then `‧`.
pub fn natural_tone_mark_index(text: &str) -> Option<usize> {
    text.find("--")
        .or_else(|| text.find('．'))
        .or_else(|| text.find('‧'))
}

/// True if `text` contains a CJK ideograph.
pub fn is_hanji(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c as u32, 0x4E00..=0x9FA5 | 0xF900..=0xFAFF | 0x20000..=0x2A6DF)
    })
}
