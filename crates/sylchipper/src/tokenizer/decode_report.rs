//! # Decode Reports

use crate::errors::SylError;

/// A word that could not be decoded.
#[derive(Debug)]
pub struct WordFailure {
    /// The case-normalized word.
    pub word: String,

    /// The failure.
    pub error: SylError,
}

/// The result of decoding a text.
///
/// Failed words are recorded in `failures` and are absent from `words`.
#[derive(Debug, Default)]
pub struct DecodeReport {
    /// The kept syllables of each decoded word, in text order.
    pub words: Vec<Vec<String>>,

    /// The words which failed to decode, in text order.
    pub failures: Vec<WordFailure>,
}

impl DecodeReport {
    /// Did every word decode?
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Iterate all kept syllables, word by word.
    pub fn syllables(&self) -> impl Iterator<Item = &str> {
        self.words.iter().flatten().map(String::as_str)
    }

    /// Discard the failures, keeping the decoded words.
    pub fn into_words(self) -> Vec<Vec<String>> {
        self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let report = DecodeReport {
            words: vec![
                vec!["ki".to_string(), "tap".to_string()],
                vec![],
                vec!["o".to_string()],
            ],
            failures: vec![],
        };
        assert!(report.is_complete());
        assert_eq!(report.syllables().collect::<Vec<_>>(), vec!["ki", "tap", "o"]);

        let report = DecodeReport {
            words: vec![],
            failures: vec![WordFailure {
                word: "okul".to_string(),
                error: SylError::UnfittedVocab,
            }],
        };
        assert!(!report.is_complete());
        assert!(report.into_words().is_empty());
    }
}
