//! # Shared Tokenizer

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    errors::SylResult,
    store::VocabStore,
    tokenizer::{DecodeReport, SyllableTokenizer},
    types::TokenType,
};

/// A [`SyllableTokenizer`] shared between threads.
///
/// Calls which may touch the vocabulary or the caches (everything
/// but [`inverse_transform`](Self::inverse_transform)) hold the write lock.
#[derive(Debug, Clone)]
pub struct SharedSyllableTokenizer {
    inner: Arc<RwLock<SyllableTokenizer>>,
}

impl From<SyllableTokenizer> for SharedSyllableTokenizer {
    fn from(tokenizer: SyllableTokenizer) -> Self {
        Self::new(tokenizer)
    }
}

impl SharedSyllableTokenizer {
    /// Wrap a tokenizer.
    pub fn new(tokenizer: SyllableTokenizer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tokenizer)),
        }
    }

    /// Take the read lock.
    pub fn read(&self) -> RwLockReadGuard<'_, SyllableTokenizer> {
        self.inner.read()
    }

    /// Take the write lock.
    pub fn write(&self) -> RwLockWriteGuard<'_, SyllableTokenizer> {
        self.inner.write()
    }

    /// See [`SyllableTokenizer::decode`].
    pub fn decode(
        &self,
        text: &str,
    ) -> DecodeReport {
        self.write().decode(text)
    }

    /// See [`SyllableTokenizer::tokenize`].
    pub fn tokenize(
        &self,
        text: &str,
    ) -> String {
        self.write().tokenize(text)
    }

    /// See [`SyllableTokenizer::get_id`].
    pub fn get_id(
        &self,
        syllable: &str,
    ) -> usize {
        self.write().get_id(syllable)
    }

    /// See [`SyllableTokenizer::transform`].
    pub fn transform<T: TokenType>(
        &self,
        text: &str,
    ) -> SylResult<Vec<T>> {
        self.write().transform(text)
    }

    /// See [`SyllableTokenizer::inverse_transform`].
    pub fn inverse_transform<T: TokenType>(
        &self,
        ids: &[T],
    ) -> SylResult<String> {
        self.read().inverse_transform(ids)
    }

    /// See [`SyllableTokenizer::fit`].
    pub fn fit<I, S>(
        &self,
        corpus: I,
        store: &mut dyn VocabStore,
    ) -> SylResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write().fit(corpus, store)
    }
}
