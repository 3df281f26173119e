use crate::{
    errors::SylResult,
    language::Language,
    store::{VocabStore, load_vocab},
    tokenizer::SyllableTokenizer,
    vocab::SyllableLimit,
};

/// Options for configuring a [`SyllableTokenizer`].
///
/// Options are fixed for the lifetime of the tokenizer built from them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TokenizerOptions {
    /// The language; selects casing rules and the store key.
    pub language: Language,

    /// The syllable filter.
    pub limit: SyllableLimit,
}

impl TokenizerOptions {
    /// Parse options from a language code, a limit mode name, and a threshold.
    ///
    /// ## Arguments
    /// * `language` - a language code, e.g. ``"tr"``.
    /// * `limit_by` - one of ``none``, ``vocabulary``, ``percentile``, ``count``.
    /// * `limit` - the threshold for `limit_by`.
    pub fn parse(
        language: &str,
        limit_by: &str,
        limit: f64,
    ) -> SylResult<Self> {
        Ok(Self {
            language: Language::from_code(language)?,
            limit: SyllableLimit::parse(limit_by, limit)?,
        })
    }

    /// Sets the language.
    pub fn with_language(
        mut self,
        language: Language,
    ) -> Self {
        self.language = language;
        self
    }

    /// Sets the syllable filter.
    pub fn with_limit(
        mut self,
        limit: SyllableLimit,
    ) -> Self {
        self.limit = limit;
        self
    }

    /// Build a tokenizer with an empty, unfitted vocabulary.
    pub fn build(&self) -> SyllableTokenizer {
        SyllableTokenizer::new(*self)
    }

    /// Build a tokenizer with the vocabulary stored for the language.
    ///
    /// Store failures, including a missing vocabulary, are returned.
    pub fn load(
        &self,
        store: &mut dyn VocabStore,
    ) -> SylResult<SyllableTokenizer> {
        let vocab = load_vocab(store, self.language)?;
        log::info!(
            "loaded {} vocabulary: {} syllables, {} occurrences",
            self.language,
            vocab.len(),
            vocab.total_count()
        );
        Ok(SyllableTokenizer::with_vocab(*self, vocab))
    }
}
