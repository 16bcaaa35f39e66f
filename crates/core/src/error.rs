//! Error type shared by the rhyme search and the data-entry operations.

use crate::types::{SyllableId, WordId};

/// Failures surfaced to callers.
///
/// Empty search results are not errors; see `SyllableRhymes::NotFound`
/// and `WordRhymes::NotFound`.
#[derive(Debug, thiserror::Error)]
pub enum RhymeError {
    #[error("{0} is required")]
    MissingParameter(&'static str),
    #[error("rhyming syllable count must be between 1 and {available}, got {requested}")]
    SyllableCountOutOfRange { requested: usize, available: usize },
    #[error("invalid rhyme options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    #[error("could not analyze syllable {position} ({lomaji:?})")]
    UnresolvedSyllable { position: usize, lomaji: String },
    #[error("invalid word: {0}")]
    InvalidWord(String),
    #[error("word already exists: {0}")]
    DuplicateWord(String),
    #[error("no syllable with id {0}")]
    UnknownSyllable(SyllableId),
    #[error("no word with id {0}")]
    UnknownWord(WordId),
    #[error("syllable {id} is still used by {words} word(s)")]
    SyllableInUse { id: SyllableId, words: u32 },
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl RhymeError {
    /// True for errors caused by the caller's input rather than the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, RhymeError::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = RhymeError::SyllableCountOutOfRange { requested: 4, available: 2 };
        assert_eq!(e.to_string(), "rhyming syllable count must be between 1 and 2, got 4");
        assert_eq!(RhymeError::MissingParameter("lomaji").to_string(), "lomaji is required");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(RhymeError::UnknownWord(1).is_client_error());
        assert!(!RhymeError::Store(anyhow::anyhow!("disk gone")).is_client_error());
    }

    #[test]
    fn test_options_error_conversion() {
        let err: RhymeError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, RhymeError::InvalidOptions(_)));
    }
}
