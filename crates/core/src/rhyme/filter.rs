//! Feature filters handed to a syllable store.

use crate::types::SyllableFeatures;

/// Accepted values for one feature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeatureFilter<T> {
    /// Unconstrained
    #[default]
    Any,
    /// Exactly one value
    Is(T),
    /// Any of several values
    OneOf(Vec<T>),
}

impl<T: PartialEq> FeatureFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            FeatureFilter::Any => true,
            FeatureFilter::Is(expected) => expected == value,
            FeatureFilter::OneOf(accepted) => accepted.contains(value),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, FeatureFilter::Any)
    }
}

/// Coda filter. `None` stands for "no coda", so `Is(None)` only accepts
/// open syllables and `OneOf([Some("h"), None])` accepts both.
pub type CodaFilter = FeatureFilter<Option<String>>;

impl CodaFilter {
    /// Accept only syllables without a coda.
    pub fn no_coda() -> Self {
        FeatureFilter::Is(None)
    }

    /// Accept any of `codas`, where `None` means no coda.
    pub fn codas(codas: &[Option<&str>]) -> Self {
        FeatureFilter::OneOf(codas.iter().map(|c| c.map(str::to_string)).collect())
    }
}

/// Conjunction of per-feature filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyllableFilter {
    pub vowel: FeatureFilter<String>,
    pub coda: CodaFilter,
    pub nasal: FeatureFilter<bool>,
    pub tone: FeatureFilter<u8>,
}

impl SyllableFilter {
    pub fn matches(&self, features: &SyllableFeatures) -> bool {
        self.vowel.matches(&features.vowel)
            && self.coda.matches(&features.coda)
            && self.nasal.matches(&features.nasal)
            && self.tone.matches(&features.tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(vowel: &str, coda: Option<&str>, nasal: bool, tone: u8) -> SyllableFeatures {
        SyllableFeatures {
            lomaji: String::new(),
            consonant: String::new(),
            vowel: vowel.into(),
            coda: coda.map(str::to_string),
            nasal,
            tone,
        }
    }

    #[test]
    fn test_feature_filter_variants() {
        assert!(FeatureFilter::<u8>::Any.matches(&3));
        assert!(FeatureFilter::Is(3u8).matches(&3));
        assert!(!FeatureFilter::Is(3u8).matches(&4));
        assert!(FeatureFilter::OneOf(vec![1u8, 4]).matches(&4));
        assert!(!FeatureFilter::OneOf(vec![1u8, 4]).matches(&2));
    }

    #[test]
    fn test_coda_filter_null() {
        let f = CodaFilter::no_coda();
        assert!(f.matches(&None));
        assert!(!f.matches(&Some("h".into())));

        let f = CodaFilter::codas(&[Some("h"), None]);
        assert!(f.matches(&None));
        assert!(f.matches(&Some("h".into())));
        assert!(!f.matches(&Some("k".into())));
    }

    #[test]
    fn test_syllable_filter_default_accepts_all() {
        let f = SyllableFilter::default();
        assert!(f.matches(&features("a", Some("ng"), false, 1)));
        assert!(f.matches(&features("", None, true, 9)));
    }

    #[test]
    fn test_syllable_filter_conjunction() {
        let f = SyllableFilter {
            vowel: FeatureFilter::Is("a".into()),
            nasal: FeatureFilter::Is(false),
            ..Default::default()
        };
        assert!(f.matches(&features("a", Some("t"), false, 4)));
        assert!(!f.matches(&features("a", Some("t"), true, 4)));
        assert!(!f.matches(&features("e", Some("t"), false, 4)));
    }
}
