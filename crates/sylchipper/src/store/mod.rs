//! # Vocabulary Stores
//!
//! A [`VocabStore`] persists opaque vocabulary payloads keyed by
//! [`Language`]. The payload encoding is owned by [`crate::vocab::io`].
//!
//! * [`MemoryVocabStore`] - an in-process store.
//! * ``disk_cache::SylchipperDiskCache`` - the on-disk store (feature ``disk``).

#[cfg(feature = "disk")]
mod disk_store;
mod memory_store;

#[cfg(feature = "disk")]
#[doc(inline)]
pub use disk_store::{VOCAB_CONTEXT, vocab_file_name};
#[doc(inline)]
pub use memory_store::MemoryVocabStore;

use crate::{
    errors::SylResult,
    language::Language,
    vocab::{
        SyllableVocab,
        io::{vocab_from_bytes, vocab_to_bytes},
    },
};

/// Load/save of vocabulary payloads, keyed by language.
pub trait VocabStore {
    /// Fetch the payload stored for `language`.
    ///
    /// ## Returns
    /// The payload, or [`SylError::VocabNotFound`](crate::SylError::VocabNotFound).
    fn load_vocab_bytes(
        &mut self,
        language: Language,
    ) -> SylResult<Vec<u8>>;

    /// Replace the payload stored for `language`.
    fn save_vocab_bytes(
        &mut self,
        language: Language,
        bytes: &[u8],
    ) -> SylResult<()>;
}

/// Load and rank the vocabulary stored for `language`.
pub fn load_vocab(
    store: &mut dyn VocabStore,
    language: Language,
) -> SylResult<SyllableVocab> {
    let bytes = store.load_vocab_bytes(language)?;
    log::debug!("loaded {} vocab bytes for {language}", bytes.len());
    vocab_from_bytes(&bytes)
}

/// Persist `vocab` as the vocabulary for `language`.
pub fn save_vocab(
    store: &mut dyn VocabStore,
    language: Language,
    vocab: &SyllableVocab,
) -> SylResult<()> {
    let bytes = vocab_to_bytes(vocab)?;
    log::debug!("saving {} vocab bytes for {language}", bytes.len());
    store.save_vocab_bytes(language, &bytes)
}
