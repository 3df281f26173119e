//! # In-Memory Vocabulary Store

use crate::{
    errors::{SylError, SylResult},
    language::Language,
    store::VocabStore,
    types::{SylHashMap, hash_map_new},
};

/// A [`VocabStore`] holding payloads in process memory.
#[derive(Debug, Clone)]
pub struct MemoryVocabStore {
    payloads: SylHashMap<Language, Vec<u8>>,
}

impl Default for MemoryVocabStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryVocabStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            payloads: hash_map_new(),
        }
    }

    /// The payload held for `language`, if any.
    pub fn get(
        &self,
        language: Language,
    ) -> Option<&[u8]> {
        self.payloads.get(&language).map(Vec::as_slice)
    }
}

impl VocabStore for MemoryVocabStore {
    fn load_vocab_bytes(
        &mut self,
        language: Language,
    ) -> SylResult<Vec<u8>> {
        self.payloads
            .get(&language)
            .cloned()
            .ok_or_else(|| SylError::VocabNotFound(language.to_string()))
    }

    fn save_vocab_bytes(
        &mut self,
        language: Language,
        bytes: &[u8],
    ) -> SylResult<()> {
        self.payloads.insert(language, bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        store::{load_vocab, save_vocab},
        vocab::SyllableVocab,
    };

    #[test]
    fn test_missing() {
        let mut store = MemoryVocabStore::new();
        match store.load_vocab_bytes(Language::Turkish) {
            Err(SylError::VocabNotFound(lang)) => assert_eq!(lang, "tr"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_save_load() {
        let mut store = MemoryVocabStore::new();
        let vocab: SyllableVocab = vec![("ki", 2), ("tap", 1)].into_iter().collect();

        save_vocab(&mut store, Language::Turkish, &vocab).unwrap();
        assert_eq!(store.get(Language::Turkish), Some(&b"a2k= 2\ndGFw 1\n"[..]));

        let loaded = load_vocab(&mut store, Language::Turkish).unwrap();
        assert_eq!(loaded, vocab);
    }
}
