//! # Character Classification
//!
//! Vowel/consonant classification over arbitrary Unicode characters,
//! by way of a memoized ASCII transliteration.

mod char_classifier;

#[doc(inline)]
pub use char_classifier::{CANONICAL_VOWELS, CharClass, CharClassifier, transliterate};
