//! # Disk Vocabulary Store

use crate::{
    disk_cache::SylchipperDiskCache,
    errors::{SylError, SylResult},
    language::Language,
    store::VocabStore,
};

/// Data-dir context for vocabulary files.
pub const VOCAB_CONTEXT: &[&str] = &["vocab"];

/// The vocabulary file name for `language`.
pub fn vocab_file_name(language: Language) -> String {
    format!("{}.syllable.vec", language.code())
}

impl VocabStore for SylchipperDiskCache {
    fn load_vocab_bytes(
        &mut self,
        language: Language,
    ) -> SylResult<Vec<u8>> {
        self.load_data(VOCAB_CONTEXT, vocab_file_name(language))
            .map_err(|e| SylError::External(format!("{e:#}")))?
            .ok_or_else(|| SylError::VocabNotFound(language.to_string()))
    }

    fn save_vocab_bytes(
        &mut self,
        language: Language,
        bytes: &[u8],
    ) -> SylResult<()> {
        let path = self
            .store_data(VOCAB_CONTEXT, vocab_file_name(language), bytes)
            .map_err(|e| SylError::External(format!("{e:#}")))?;
        log::info!("wrote vocabulary: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        disk_cache::SylchipperDiskCacheOptions,
        store::{load_vocab, save_vocab},
        vocab::SyllableVocab,
    };

    #[test]
    fn test_disk_store() {
        tempdir::TempDir::new("disk_store_test")
            .and_then(|dir| {
                let mut cache = SylchipperDiskCache::new(
                    SylchipperDiskCacheOptions::default().with_data_dir(Some(dir.path())),
                )
                .unwrap();

                assert!(matches!(
                    load_vocab(&mut cache, Language::Turkish),
                    Err(SylError::VocabNotFound(_))
                ));

                let vocab: SyllableVocab = vec![("ev", 4), ("ler", 2)].into_iter().collect();
                save_vocab(&mut cache, Language::Turkish, &vocab).unwrap();
                assert!(dir.path().join("vocab").join("tr.syllable.vec").exists());

                let loaded = load_vocab(&mut cache, Language::Turkish).unwrap();
                assert_eq!(loaded, vocab);

                Ok(())
            })
            .unwrap();
    }
}
