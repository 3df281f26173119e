//! # Supported Languages

use core::str::FromStr;

use unicode_normalization::UnicodeNormalization;

use crate::errors::{SylError, SylResult};

/// The languages a tokenizer may be configured for.
///
/// Languages are named by their lower-case ISO 639-1 code.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
#[non_exhaustive]
pub enum Language {
    /// Turkish.
    #[default]
    #[strum(serialize = "tr")]
    Turkish,
}

impl Language {
    /// Parse a language code.
    ///
    /// ## Returns
    /// The language, or [`SylError::UnsupportedLanguage`].
    pub fn from_code(code: &str) -> SylResult<Self> {
        Self::from_str(code).map_err(|_| SylError::UnsupportedLanguage(code.to_string()))
    }

    /// The language code; also the key used by vocabulary stores.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Apply the casing rules of the language to `text`.
    ///
    /// Text is NFC composed before lower-casing, so decomposed input
    /// classifies the same as precomposed input.
    pub fn normalize_case(
        &self,
        text: &str,
    ) -> String {
        match self {
            // `İ`.to_lowercase() is "i\u{307}"; fold the dotted capital first.
            Self::Turkish => text.nfc().collect::<String>().replace('İ', "i").to_lowercase(),
        }
    }
}
