//! # Syllable Tokenizer Implementation

use std::path::Path;

use crate::{
    classify::CharClassifier,
    errors::{SylError, SylResult},
    language::Language,
    segmentation::segment_word,
    store::{VocabStore, load_vocab, save_vocab},
    tokenizer::{DecodeReport, TokenizerOptions, WordFailure},
    types::{SylHashMap, TokenType, hash_map_new},
    vocab::{
        SyllableVocab,
        io::{load_vocab_path, save_vocab_path},
    },
};

/// Syllable tokenizer.
///
/// Text is split on whitespace into words; each word is case-normalized,
/// segmented into syllables, and filtered by the configured limit.
/// Token ids are vocabulary ranks.
#[derive(Debug, Clone)]
pub struct SyllableTokenizer {
    options: TokenizerOptions,
    classifier: CharClassifier,
    vocab: SyllableVocab,

    /// Normalized word -> kept syllables.
    decode_cache: SylHashMap<String, Vec<String>>,
}

impl SyllableTokenizer {
    /// Create a tokenizer with an empty, unfitted vocabulary.
    pub fn new(options: TokenizerOptions) -> Self {
        Self::with_vocab(options, SyllableVocab::new())
    }

    /// Create a tokenizer over an existing vocabulary.
    pub fn with_vocab(
        options: TokenizerOptions,
        vocab: SyllableVocab,
    ) -> Self {
        Self {
            options,
            classifier: CharClassifier::new(),
            vocab,
            decode_cache: hash_map_new(),
        }
    }

    /// Create a tokenizer with the vocabulary stored for `options.language`.
    ///
    /// See [`TokenizerOptions::load`].
    pub fn load(
        options: TokenizerOptions,
        store: &mut dyn VocabStore,
    ) -> SylResult<Self> {
        options.load(store)
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Get the language.
    pub fn language(&self) -> Language {
        self.options.language
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &SyllableVocab {
        &self.vocab
    }

    /// Should a segmented syllable be kept?
    ///
    /// ## Returns
    /// * `Ok(true)` when no filter is configured;
    /// * `Err(SylError::UnfittedVocab)` when a filter is configured
    ///   but the vocabulary has not been fit or loaded;
    /// * otherwise, whether the vocabulary entry passes the filter.
    ///   A syllable missing from the vocabulary never passes.
    pub fn should_return_syllable(
        &self,
        syllable: &str,
    ) -> SylResult<bool> {
        let limit = &self.options.limit;
        if limit.is_unlimited() {
            return Ok(true);
        }
        if !self.vocab.is_fitted() {
            return Err(SylError::UnfittedVocab);
        }
        Ok(limit.allows(self.vocab.get(syllable)))
    }

    fn decode_word(
        &mut self,
        word: &str,
    ) -> SylResult<Vec<String>> {
        let mut kept = Vec::new();
        for syllable in segment_word(&mut self.classifier, word) {
            if self.should_return_syllable(syllable)? {
                kept.push(syllable.to_string());
            }
        }
        Ok(kept)
    }

    /// Decode `text` into the kept syllables of each word.
    ///
    /// Decoded words are cached by their normalized form. A word that
    /// fails is logged, reported in [`DecodeReport::failures`], left out
    /// of [`DecodeReport::words`], and not cached.
    pub fn decode(
        &mut self,
        text: &str,
    ) -> DecodeReport {
        let mut report = DecodeReport::default();

        for word in text.split_whitespace() {
            let word = self.options.language.normalize_case(word);

            if let Some(syllables) = self.decode_cache.get(&word) {
                report.words.push(syllables.clone());
                continue;
            }

            match self.decode_word(&word) {
                Ok(syllables) => {
                    self.decode_cache.insert(word, syllables.clone());
                    report.words.push(syllables);
                }
                Err(error) => {
                    log::warn!("failed to decode {word:?}: {error}");
                    report.failures.push(WordFailure { word, error });
                }
            }
        }

        report
    }

    /// Tokenize `text` into a space-separated syllable string.
    ///
    /// The syllables of each word are joined with a space, then the words
    /// are joined with a space; a word with no kept syllables is an empty
    /// element. Whitespace runs and case are not preserved.
    pub fn tokenize(
        &mut self,
        text: &str,
    ) -> String {
        self.decode(text)
            .words
            .iter()
            .map(|syllables| syllables.join(" "))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Get the id of `syllable`.
    ///
    /// An unseen syllable is appended to the vocabulary with a zero count
    /// and an unranked percentile; its id is the new vocabulary size.
    pub fn get_id(
        &mut self,
        syllable: &str,
    ) -> usize {
        self.vocab.rank_or_insert(syllable)
    }

    /// Encode `text` as the ids of its kept syllables.
    ///
    /// Unseen syllables are added to the vocabulary; see [`get_id`](Self::get_id).
    ///
    /// ## Returns
    /// The ids, or [`SylError::VocabSizeOverflow`] when an id does not fit `T`.
    pub fn transform<T: TokenType>(
        &mut self,
        text: &str,
    ) -> SylResult<Vec<T>> {
        let report = self.decode(text);
        report
            .syllables()
            .map(|syllable| {
                let id = self.get_id(syllable);
                T::from_usize(id).ok_or(SylError::VocabSizeOverflow { size: id })
            })
            .collect()
    }

    /// Decode ids back into a space-separated syllable string.
    ///
    /// ## Returns
    /// The text, or [`SylError::TokenOutOfRange`] for the first id which
    /// names no vocabulary entry. The vocabulary is unchanged.
    pub fn inverse_transform<T: TokenType>(
        &self,
        ids: &[T],
    ) -> SylResult<String> {
        let syllables = ids
            .iter()
            .map(|id| {
                id.to_usize()
                    .and_then(|rank| self.vocab.syllable_for_rank(rank))
                    .ok_or_else(|| SylError::TokenOutOfRange {
                        id: id.to_u64().unwrap_or(u64::MAX),
                        size: self.vocab.len(),
                    })
            })
            .collect::<SylResult<Vec<&str>>>()?;
        Ok(syllables.join(" "))
    }

    /// Replace the vocabulary with one counted from `corpus`, without persisting it.
    ///
    /// Every segmented syllable is counted; the filter is not applied.
    /// The decode cache is kept.
    pub fn fit_vocab<I, S>(
        &mut self,
        corpus: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = SyllableVocab::new();
        for line in corpus {
            for word in line.as_ref().split_whitespace() {
                let word = self.options.language.normalize_case(word);
                for syllable in segment_word(&mut self.classifier, &word) {
                    vocab.increment(syllable);
                }
            }
        }
        vocab.process();

        log::info!(
            "fit {} vocabulary: {} syllables, {} occurrences",
            self.options.language,
            vocab.len(),
            vocab.total_count()
        );
        self.vocab = vocab;
    }

    /// Fit the vocabulary on `corpus`, then save it to `store`.
    ///
    /// See [`fit_vocab`](Self::fit_vocab).
    pub fn fit<I, S>(
        &mut self,
        corpus: I,
        store: &mut dyn VocabStore,
    ) -> SylResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fit_vocab(corpus);
        self.save(store)
    }

    /// Save the vocabulary to `store`, under the tokenizer language.
    pub fn save(
        &self,
        store: &mut dyn VocabStore,
    ) -> SylResult<()> {
        save_vocab(store, self.options.language, &self.vocab)
    }

    /// Replace the vocabulary with the one `store` holds for the tokenizer language.
    pub fn reload(
        &mut self,
        store: &mut dyn VocabStore,
    ) -> SylResult<()> {
        self.vocab = load_vocab(store, self.options.language)?;
        Ok(())
    }

    /// Save the vocabulary to a file.
    pub fn save_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> SylResult<()> {
        save_vocab_path(&self.vocab, path)
    }

    /// Replace the vocabulary with the one held in a file.
    pub fn reload_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> SylResult<()> {
        self.vocab = load_vocab_path(path)?;
        Ok(())
    }

    /// Drop all cached word decodes.
    pub fn clear_decode_cache(&mut self) {
        self.decode_cache.clear();
    }

    /// The number of cached word decodes.
    pub fn decode_cache_len(&self) -> usize {
        self.decode_cache.len()
    }
}
