//! # Word Segmentation
//!
//! Splits single words into syllables with a positional vowel/consonant
//! state machine:
//! * adjacent vowels always split;
//! * a consonant run before a vowel keeps exactly one consonant with
//!   that vowel, once the preceding span has a vowel of its own;
//! * special characters are emitted as singleton pieces.

mod syllable_segmentor;

#[doc(inline)]
pub use syllable_segmentor::{SyllableIter, segment_word};
