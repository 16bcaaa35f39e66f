//! Positional segmentation of a syllable into consonant, vowel and coda.
//!
//! All three lookups are first-match scans over ordered candidate lists.
//! The list order decides ambiguous cases (`chh` before `ch`, `iau`
//! before `a`), so the constants below must not be re-sorted.

use super::diacritics::{strip_tone, NASAL_MARK, O_DOT};

/// Initial consonants, longest first.
pub const CONSONANTS: [&str; 17] = [
    "chh", "ch", "ph", "th", "kh", "ng", "p", "t", "k", "b", "l", "g", "m", "n", "j", "s", "h",
];

/// Vowel clusters in priority order.
pub const VOWELS: [&str; 16] = [
    "iau", "oai", "ai", "au", "ia", "iu", "io", "oa", "oe", "ui", "a", "i", "u", "o\u{358}", "e",
    "o",
];

/// Final consonants in suffix-match order.
pub const CODAS: [&str; 7] = ["ng", "p", "t", "k", "h", "m", "n"];

/// Segmental features of one syllable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments {
    pub consonant: String,
    pub vowel: String,
    pub coda: Option<String>,
    pub nasal: bool,
}

/// Segment a syllable. Tone marks are stripped first.
///
/// Unparseable input gives an empty vowel, no coda and `nasal == false`.
pub fn segment(syllable: &str) -> Segments {
    let clean = strip_tone(syllable);
    let consonant = consonant_of(&clean, &CONSONANTS);
    let vowel = vowel_of(&clean, consonant, &VOWELS);
    let coda = coda_of(&clean, &vowel, &CODAS);
    let nasal = nasal_of(&clean, consonant, &vowel);
    Segments {
        consonant: consonant.to_string(),
        vowel,
        coda: coda.map(str::to_string),
        nasal,
    }
}

/// Initial consonant, or `""` for none.
pub fn consonant(syllable: &str) -> String {
    consonant_of(&strip_tone(syllable), &CONSONANTS).to_string()
}

/// Vowel nucleus, or `""` when no nucleus can be found.
pub fn vowel(syllable: &str) -> String {
    segment(syllable).vowel
}

/// Final consonant.
pub fn coda(syllable: &str) -> Option<String> {
    segment(syllable).coda
}

/// Whether the syllable is nasalized.
pub fn nasal(syllable: &str) -> bool {
    segment(syllable).nasal
}

fn consonant_of<'a>(clean: &str, consonants: &[&'a str]) -> &'a str {
    let onset = consonants
        .iter()
        .copied()
        .find(|c| clean.starts_with(c))
        .unwrap_or("");

    // Syllabic m / ng: the leading nasal is the nucleus, not an onset.
    let syllabic_m = (clean.ends_with('m') || clean.ends_with("mh")) && clean.starts_with('m');
    let syllabic_ng = (clean.ends_with("ng") || clean.ends_with("ngh")) && clean.starts_with("ng");
    if syllabic_m || syllabic_ng {
        ""
    } else {
        onset
    }
}

fn vowel_of(clean: &str, consonant: &str, vowels: &[&str]) -> String {
    let rest = clean.strip_prefix(consonant).unwrap_or(clean);

    if let Some(cluster) = vowels.iter().copied().find(|v| rest.contains(v)) {
        if cluster == "o" || cluster == "io" {
            if let Some(idx) = rest.find('o') {
                if is_open_o_context(&rest[idx + 1..]) {
                    return cluster.replace('o', "o\u{358}");
                }
            }
        }
        return cluster.to_string();
    }

    if rest.ends_with('m') || rest.ends_with("mh") {
        return "m".to_string();
    }
    if rest.ends_with("ng") || rest.ends_with("ngh") {
        return "ng".to_string();
    }
    String::new()
}

/// Whether the text after a bare `o` makes it the open `o͘`.
fn is_open_o_context(after: &str) -> bool {
    after.starts_with('k')
        || after.starts_with("ng")
        || after.starts_with("h\u{207F}")
        || after.starts_with('m')
        || after.starts_with(NASAL_MARK)
        || after.starts_with(O_DOT)
}

fn coda_of<'a>(clean: &str, vowel: &str, codas: &[&'a str]) -> Option<&'a str> {
    if vowel.is_empty() {
        return None;
    }
    let bare = clean.replace(NASAL_MARK, "");
    if vowel == "m" || vowel == "ng" {
        // Syllabic nasals only close with a glottal stop.
        return codas.iter().copied().find(|c| *c == "h" && bare.ends_with('h'));
    }
    codas.iter().copied().find(|c| bare.ends_with(c))
}

fn nasal_of(clean: &str, consonant: &str, vowel: &str) -> bool {
    clean.contains(NASAL_MARK)
        || matches!(consonant, "m" | "n")
        || matches!(vowel, "m" | "ng")
}
