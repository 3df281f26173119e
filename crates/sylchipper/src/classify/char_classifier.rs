//! # Character Classifier

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::types::{SylHashMap, hash_map_new};

/// The canonical vowel set; every other vowel form folds onto one of these.
pub const CANONICAL_VOWELS: &str = "aeiouAEIOU";

/// The class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// A letter whose canonical form is a canonical vowel.
    Vowel,

    /// A letter whose canonical form is any other single ASCII letter.
    Plain,

    /// Punctuation, digits, symbols, and multi-character transliterations.
    Special,
}

/// A memoized canonical form.
#[derive(Debug, Clone, PartialEq)]
struct Canonical {
    ascii: String,
    class: CharClass,
}

/// Transliterate `c` to its closest ASCII representative.
///
/// The result may be empty, or longer than one character.
/// Characters without a transliteration fall back to their
/// decomposition, with combining marks stripped.
pub fn transliterate(c: char) -> String {
    if c.is_ascii() {
        return c.to_string();
    }

    if let Some(ascii) = deunicode::deunicode_char(c) {
        return ascii.to_string();
    }

    core::iter::once(c)
        .nfd()
        .filter(|&m| !is_combining_mark(m))
        .collect()
}

fn class_of(ascii: &str) -> CharClass {
    let mut chars = ascii.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            if CANONICAL_VOWELS.contains(c) {
                CharClass::Vowel
            } else {
                CharClass::Plain
            }
        }
        _ => CharClass::Special,
    }
}

/// Vowel / plain / special character classifier.
///
/// Every character is transliterated once; the result is kept
/// for the lifetime of the classifier.
#[derive(Debug, Clone)]
pub struct CharClassifier {
    cache: SylHashMap<char, Canonical>,
}

impl Default for CharClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CharClassifier {
    /// Create an empty classifier.
    pub fn new() -> Self {
        Self {
            cache: hash_map_new(),
        }
    }

    fn lookup(
        &mut self,
        c: char,
    ) -> &Canonical {
        self.cache.entry(c).or_insert_with(|| {
            let ascii = transliterate(c);
            let class = class_of(&ascii);
            Canonical { ascii, class }
        })
    }

    /// Classify `c`.
    pub fn classify(
        &mut self,
        c: char,
    ) -> CharClass {
        self.lookup(c).class
    }

    /// The canonical ASCII representative of `c`.
    pub fn canonical(
        &mut self,
        c: char,
    ) -> &str {
        &self.lookup(c).ascii
    }

    /// Is `c` a vowel?
    pub fn is_vowel(
        &mut self,
        c: char,
    ) -> bool {
        self.classify(c) == CharClass::Vowel
    }

    /// Is `c` special (not a plain letter)?
    pub fn is_special(
        &mut self,
        c: char,
    ) -> bool {
        self.classify(c) == CharClass::Special
    }

    /// Does `text` contain at least one vowel?
    pub fn has_vowel(
        &mut self,
        text: &str,
    ) -> bool {
        text.chars().any(|c| self.is_vowel(c))
    }

    /// The number of distinct characters seen so far.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
