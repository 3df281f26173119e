//! # `sylchipper` Syllable Tokenizer
//!
//! This is a vowel-heuristic syllable tokenizer, built for Turkish,
//! with a frequency-ranked syllable vocabulary.
//!
//! Token ids are vocabulary ranks: the most frequent syllable of the
//! fitting corpus has id `1`.
//!
//! See:
//! * [`classify`] for vowel / consonant / special character classification.
//! * [`segmentation`] to split words into syllables.
//! * [`vocab`] to count, rank, filter, and serialize syllable vocabularies.
//! * [`store`] to persist vocabularies, keyed by [`Language`].
//! * [`tokenizer`] for the combined tokenizer.
//!
//! ## Fitting and Tokenizing
//!
//! ```rust
//! use sylchipper::{
//!     store::MemoryVocabStore,
//!     tokenizer::TokenizerOptions,
//! };
//!
//! let mut store = MemoryVocabStore::new();
//!
//! let mut tokenizer = TokenizerOptions::parse("tr", "none", 0.0)?.build();
//! tokenizer.fit(["kitaplar okul", "okul"], &mut store)?;
//!
//! assert_eq!(tokenizer.tokenize("Kitaplar okul"), "ki tap lar o kul");
//!
//! let ids: Vec<u32> = tokenizer.transform("okul")?;
//! assert_eq!(ids, vec![1, 2]);
//! assert_eq!(tokenizer.inverse_transform(&ids)?, "o kul");
//! # Ok::<(), sylchipper::SylError>(())
//! ```
//!
//! ## Crate Features
//!
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "disk")]
#[doc(inline)]
pub use sylchipper_disk_cache as disk_cache;

pub mod classify;
pub mod errors;
pub mod language;
pub mod segmentation;
pub mod store;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{SylError, SylResult};
#[doc(inline)]
pub use language::Language;
#[doc(inline)]
pub use tokenizer::{SharedSyllableTokenizer, SyllableTokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
