//! Expansion of a syllable's features into the set of acceptable rhymes.
//!
//! Each rhyme option relaxes one feature independently, so options
//! compose: vowel classes and coda classes can both apply at once.

use std::collections::HashMap;

use super::filter::{CodaFilter, FeatureFilter, SyllableFilter};
use super::options::RhymeOptions;

lazy_static::lazy_static! {
    /// Vowels heard as rhyming with each vowel. Not symmetric: `a`
    /// accepts `ia` and `oa`, but `ia` and `oa` do not accept each other.
    static ref SIMILAR_VOWELS: HashMap<&'static str, &'static [&'static str]> = {
        let mut m = HashMap::new();
        m.insert("iau", &["iau", "au"][..]);
        m.insert("oai", &["oai", "ai"][..]);
        m.insert("ai", &["oai", "ai"][..]);
        m.insert("au", &["iau", "au"][..]);
        m.insert("ia", &["ia", "a"][..]);
        m.insert("io\u{358}", &["io\u{358}", "o\u{358}"][..]);
        m.insert("io", &["io", "o"][..]);
        m.insert("oa", &["oa", "a"][..]);
        m.insert("oe", &["oe", "e"][..]);
        m.insert("ui", &["ui", "i"][..]);
        m.insert("a", &["a", "ia", "oa"][..]);
        m.insert("i", &["i", "ui"][..]);
        m.insert("e", &["e", "oe"][..]);
        m.insert("o", &["o", "io"][..]);
        m.insert("o\u{358}", &["o\u{358}", "io\u{358}"][..]);
        m
    };
}

/// Codas grouped by place of articulation. A glottal stop counts as
/// equivalent to an open syllable.
const ARTICULATION_CLASSES: [&[Option<&str>]; 4] = [
    &[Some("p"), Some("m")],
    &[Some("t"), Some("n"), Some("l")],
    &[Some("k"), Some("ng")],
    &[Some("h"), None],
];

/// Vowel filter. Exact unless `similar_vowel` is set; an empty vowel
/// leaves the vowel unconstrained.
pub fn expand_vowel(vowel: &str, opts: &RhymeOptions) -> FeatureFilter<String> {
    if vowel.is_empty() {
        return FeatureFilter::Any;
    }
    if opts.similar_vowel {
        if let Some(class) = SIMILAR_VOWELS.get(vowel) {
            return FeatureFilter::OneOf(class.iter().map(|v| v.to_string()).collect());
        }
    }
    FeatureFilter::Is(vowel.to_string())
}

/// Coda filter, which depends on the vowel as well as the options.
pub fn expand_coda(vowel: &str, coda: Option<&str>, opts: &RhymeOptions) -> CodaFilter {
    let coda = match coda.filter(|c| !c.is_empty()) {
        Some(c) => c,
        None if vowel == "e" => return CodaFilter::codas(&[None, Some("h")]),
        None => return CodaFilter::no_coda(),
    };

    if vowel == "e" {
        // -ek and -eng are the same rhyme in several accents; any other
        // final after e is left unconstrained
        return match coda {
            "k" | "ng" if opts.ignore_final_sound => {
                CodaFilter::codas(&[Some("k"), Some("ng")])
            }
            "k" | "ng" => FeatureFilter::Is(Some(coda.to_string())),
            _ => FeatureFilter::Any,
        };
    }

    if opts.ignore_final_sound {
        return FeatureFilter::Any;
    }
    if opts.same_articulation_part {
        if let Some(class) = articulation_class(coda) {
            return CodaFilter::codas(class);
        }
    }
    FeatureFilter::Is(Some(coda.to_string()))
}

/// Place-of-articulation class containing `coda`.
pub fn articulation_class(coda: &str) -> Option<&'static [Option<&'static str>]> {
    ARTICULATION_CLASSES
        .iter()
        .copied()
        .find(|class| class.iter().any(|c| *c == Some(coda)))
}

/// Tone filter: only with `same_tone` and a tone in 1..=9.
pub fn expand_tone(tone: Option<u8>, opts: &RhymeOptions) -> FeatureFilter<u8> {
    match tone {
        Some(t) if opts.same_tone && (1..=9).contains(&t) => FeatureFilter::Is(t),
        _ => FeatureFilter::Any,
    }
}

/// Nasal filter: exact unless `ignore_nasal_sound` is set.
pub fn expand_nasal(nasal: bool, opts: &RhymeOptions) -> FeatureFilter<bool> {
    if opts.ignore_nasal_sound {
        FeatureFilter::Any
    } else {
        FeatureFilter::Is(nasal)
    }
}

/// Full filter for syllables rhyming with the given features.
pub fn build_filter(
    vowel: &str,
    coda: Option<&str>,
    nasal: bool,
    tone: Option<u8>,
    opts: &RhymeOptions,
) -> SyllableFilter {
    SyllableFilter {
        vowel: expand_vowel(vowel, opts),
        coda: expand_coda(vowel, coda, opts),
        nasal: expand_nasal(nasal, opts),
        tone: expand_tone(tone, opts),
    }
}
