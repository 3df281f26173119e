//! # Syllable Tokenizer
//!
//! [`SyllableTokenizer`] combines:
//!  * a [`CharClassifier`](crate::classify::CharClassifier),
//!  * a [`SyllableVocab`](crate::vocab::SyllableVocab),
//!  * a [`SyllableLimit`](crate::vocab::SyllableLimit) filter, and
//!  * a per-word decode cache.
//!
//! Tokenizers are configured through [`TokenizerOptions`].

mod decode_report;
mod shared_tokenizer;
mod syllable_tokenizer;
mod tokenizer_options;

#[doc(inline)]
pub use decode_report::*;
#[doc(inline)]
pub use shared_tokenizer::*;
#[doc(inline)]
pub use syllable_tokenizer::*;
#[doc(inline)]
pub use tokenizer_options::*;
