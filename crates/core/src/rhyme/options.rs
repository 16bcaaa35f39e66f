use serde::{Deserialize, Serialize};

use crate::error::RhymeError;

/// Toggles that relax or tighten one filter dimension each.
///
/// Field names serialize in PascalCase (`SimilarVowel`, ...), the form
/// used by option payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RhymeOptions {
    /// Accept nasal and oral syllables alike
    pub ignore_nasal_sound: bool,
    /// Widen the vowel to its equivalence class
    pub similar_vowel: bool,
    /// Drop the coda filter
    pub ignore_final_sound: bool,
    /// Widen the coda to its place-of-articulation class
    pub same_articulation_part: bool,
    /// Require the same tone
    pub same_tone: bool,
}

impl RhymeOptions {
    /// Parse a JSON options payload. Missing fields default to `false`.
    pub fn from_json(payload: &str) -> Result<Self, RhymeError> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let opts = RhymeOptions::default();
        assert!(!opts.ignore_nasal_sound);
        assert!(!opts.similar_vowel);
        assert!(!opts.ignore_final_sound);
        assert!(!opts.same_articulation_part);
        assert!(!opts.same_tone);
    }

    #[test]
    fn test_from_json_pascal_case() {
        let opts = RhymeOptions::from_json(r#"{"SimilarVowel": true, "SameTone": true}"#).unwrap();
        assert!(opts.similar_vowel);
        assert!(opts.same_tone);
        assert!(!opts.ignore_final_sound);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            RhymeOptions::from_json("{SimilarVowel: yes"),
            Err(RhymeError::InvalidOptions(_))
        ));
        assert!(matches!(
            RhymeOptions::from_json(r#"{"SimilarVowel": "yes"}"#),
            Err(RhymeError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_serialize_names() {
        let opts = RhymeOptions { ignore_nasal_sound: true, ..Default::default() };
        let v = serde_json::to_value(opts).unwrap();
        assert_eq!(v["IgnoreNasalSound"], true);
        assert_eq!(v["SameArticulationPart"], false);
    }
}
