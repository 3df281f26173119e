//! # Syllable Segmentor

use core::ops::Range;

use crate::classify::{CharClass, CharClassifier};

/// Split a single word into syllables and special-character pieces.
///
/// The word must not contain whitespace. The concatenation of the
/// produced pieces is exactly `word`.
///
/// ## Arguments
/// * `classifier` - the character classifier; its cache is extended.
/// * `word` - the word to split.
pub fn segment_word<'w>(
    classifier: &mut CharClassifier,
    word: &'w str,
) -> SyllableIter<'w> {
    SyllableIter::new(classifier, word)
}

/// Lazy piece iterator over one word.
///
/// Scans characters left to right, holding a trailing cursor at the
/// start of the pending (not yet emitted) span.
#[derive(Debug, Clone)]
pub struct SyllableIter<'w> {
    word: &'w str,

    /// Byte offset of every char, plus `word.len()`.
    offsets: Vec<usize>,

    classes: Vec<CharClass>,

    /// Next char position to scan.
    pos: usize,

    /// Start of the pending span, as a char position.
    last: usize,

    /// A special-char piece owed after the span just returned.
    queued: Option<Range<usize>>,
}

impl<'w> SyllableIter<'w> {
    fn new(
        classifier: &mut CharClassifier,
        word: &'w str,
    ) -> Self {
        let mut offsets = Vec::with_capacity(word.len() + 1);
        let mut classes = Vec::with_capacity(word.len());
        for (offset, c) in word.char_indices() {
            offsets.push(offset);
            classes.push(classifier.classify(c));
        }
        offsets.push(word.len());

        Self {
            word,
            offsets,
            classes,
            pos: 0,
            last: 0,
            queued: None,
        }
    }

    fn chars(&self) -> usize {
        self.classes.len()
    }

    fn piece(
        &self,
        span: Range<usize>,
    ) -> &'w str {
        let word: &'w str = self.word;
        &word[self.offsets[span.start]..self.offsets[span.end]]
    }

    fn is_vowel(
        &self,
        i: usize,
    ) -> bool {
        self.classes[i] == CharClass::Vowel
    }
}

impl<'w> Iterator for SyllableIter<'w> {
    type Item = &'w str;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(span) = self.queued.take() {
            return Some(self.piece(span));
        }

        while self.pos < self.chars() {
            let i = self.pos;
            self.pos += 1;

            if self.classes[i] == CharClass::Special {
                let last = self.last;
                self.last = i + 1;
                if last < i {
                    self.queued = Some(i..i + 1);
                    return Some(self.piece(last..i));
                }
                return Some(self.piece(i..i + 1));
            }

            if i == 0 || self.last == i || !self.is_vowel(i) {
                continue;
            }

            if self.is_vowel(i - 1) {
                // Hiatus: adjacent vowels never share a syllable.
                let last = self.last;
                self.last = i;
                return Some(self.piece(last..i));
            }

            // Keep one consonant with the vowel; split off the rest of the cluster
            // only once the pending span already holds a vowel of its own.
            if self.last < i - 1 && (self.last..i - 1).any(|j| self.is_vowel(j)) {
                let last = self.last;
                self.last = i - 1;
                return Some(self.piece(last..i - 1));
            }
        }

        if self.last < self.chars() {
            let last = self.last;
            self.last = self.chars();
            return Some(self.piece(last..self.chars()));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn split(word: &str) -> Vec<String> {
        let mut classifier = CharClassifier::new();
        segment_word(&mut classifier, word)
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_turkish_words() {
        assert_eq!(split("kitaplar"), vec!["ki", "tap", "lar"]);
        assert_eq!(split("okul"), vec!["o", "kul"]);
        assert_eq!(split("merhaba"), vec!["mer", "ha", "ba"]);
        assert_eq!(split("türkçe"), vec!["türk", "çe"]);
        assert_eq!(split("ışık"), vec!["ı", "şık"]);
        assert_eq!(split("strateji"), vec!["stra", "te", "ji"]);
    }

    #[test]
    fn test_hiatus() {
        assert_eq!(split("saat"), vec!["sa", "at"]);
        assert_eq!(split("aa"), vec!["a", "a"]);
        assert_eq!(split("şiir"), vec!["şi", "ir"]);
    }

    #[test]
    fn test_special_chars() {
        assert_eq!(split("merhaba,"), vec!["mer", "ha", "ba", ","]);
        assert_eq!(split("3d"), vec!["3", "d"]);
        assert_eq!(split("a...b"), vec!["a", ".", ".", ".", "b"]);
        assert_eq!(split("\"evet\""), vec!["\"", "e", "vet", "\""]);
        assert_eq!(split("!?"), vec!["!", "?"]);
    }

    #[test]
    fn test_degenerate_words() {
        assert!(split("").is_empty());
        assert_eq!(split("brr"), vec!["brr"]);
        assert_eq!(split("a"), vec!["a"]);
        assert_eq!(split("-"), vec!["-"]);
    }

    #[test]
    fn test_multibyte_offsets() {
        assert_eq!(split("öğrenci"), vec!["öğ", "ren", "ci"]);
        assert_eq!(split("çiçek…"), vec!["çi", "çek", "…"]);
    }

    #[test]
    fn test_transliterated_scripts() {
        assert_eq!(split("привет"), vec!["при", "вет"]);
        assert_eq!(split("καλημέρα"), vec!["κα", "λη", "μέ", "ρα"]);
        assert_eq!(split("ｋｉｔａｐ"), vec!["ｋｉ", "ｔａｐ"]);
    }

    proptest! {
        #[test]
        fn reconstructs_input(word in "[a-zçğıöşü.,'0-9]{0,24}") {
            let pieces = split(&word);
            prop_assert_eq!(pieces.concat(), word);
            prop_assert!(pieces.iter().all(|p| !p.is_empty()));
        }

        #[test]
        fn adjacent_vowels_are_split(word in "[aeiouıöübdklmnrst]{0,24}") {
            let mut classifier = CharClassifier::new();
            for piece in split(&word) {
                let chars: Vec<char> = piece.chars().collect();
                for pair in chars.windows(2) {
                    prop_assert!(
                        !(classifier.is_vowel(pair[0]) && classifier.is_vowel(pair[1])),
                        "{piece:?} holds a hiatus"
                    );
                }
            }
        }

        #[test]
        fn only_the_final_piece_may_lack_a_vowel(word in "[aeioubdklmnrst]{0,24}") {
            let mut classifier = CharClassifier::new();
            let pieces = split(&word);
            if classifier.has_vowel(&word) {
                for piece in pieces.iter().take(pieces.len().saturating_sub(1)) {
                    prop_assert!(classifier.has_vowel(piece), "{piece:?} in {pieces:?}");
                }
            } else if !word.is_empty() {
                prop_assert_eq!(pieces, vec![word.clone()]);
            }
        }
    }
}
