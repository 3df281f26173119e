//! # Frequency-Ranked Syllable Vocabulary

use crate::{
    types::{SylHashMap, hash_map_new},
    vocab::{Percentile, VocabEntry},
};

/// Syllable vocabulary, as a ``{ String -> VocabEntry }`` map
/// plus the rank-ordered sequence used for id lookup.
///
/// Entries are held in insertion (first-encounter) order; ranking
/// stable-sorts that order by descending count, so equal counts keep
/// their first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct SyllableVocab {
    syllables: Vec<String>,
    entries: Vec<VocabEntry>,
    index: SylHashMap<String, usize>,

    /// `ranked[r - 1]` is the insertion slot of the entry with rank `r`.
    ranked: Vec<usize>,

    fitted: bool,
}

impl PartialEq for SyllableVocab {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.syllables == other.syllables
            && self.entries == other.entries
            && self.ranked == other.ranked
            && self.fitted == other.fitted
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for SyllableVocab {
    /// Collect `(syllable, count)` pairs, in order, then rank.
    ///
    /// Repeated syllables accumulate their counts.
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut vocab = Self::new();
        for (syllable, count) in iter {
            vocab.add_count(syllable.as_ref(), count);
        }
        vocab.process();
        vocab
    }
}

impl SyllableVocab {
    /// Create an empty, unfitted vocabulary.
    pub fn new() -> Self {
        Self {
            syllables: Vec::new(),
            entries: Vec::new(),
            index: hash_map_new(),
            ranked: Vec::new(),
            fitted: false,
        }
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Has the vocabulary been ranked from counts (by fitting or loading)?
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// The sum of all entry counts.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Does the vocabulary hold `syllable`?
    pub fn contains(
        &self,
        syllable: &str,
    ) -> bool {
        self.index.contains_key(syllable)
    }

    /// Look up the entry for `syllable`.
    pub fn get(
        &self,
        syllable: &str,
    ) -> Option<&VocabEntry> {
        self.index.get(syllable).map(|&slot| &self.entries[slot])
    }

    /// Look up the syllable holding `rank`.
    pub fn syllable_for_rank(
        &self,
        rank: usize,
    ) -> Option<&str> {
        let slot = *self.ranked.get(rank.checked_sub(1)?)?;
        Some(&self.syllables[slot])
    }

    /// Iterate entries in rank order.
    pub fn iter_ranked(&self) -> impl Iterator<Item = (&str, &VocabEntry)> {
        self.ranked
            .iter()
            .map(|&slot| (self.syllables[slot].as_str(), &self.entries[slot]))
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VocabEntry)> {
        self.syllables
            .iter()
            .map(String::as_str)
            .zip(self.entries.iter())
    }

    /// Add `count` occurrences of `syllable`, inserting it if absent.
    ///
    /// A new entry is appended to the rank order, unranked; existing
    /// ranks are unchanged until [`process`](Self::process).
    pub fn add_count(
        &mut self,
        syllable: &str,
        count: u64,
    ) {
        match self.index.get(syllable) {
            Some(&slot) => self.entries[slot].count += count,
            None => {
                self.push(syllable, count);
            }
        }
    }

    /// Record one occurrence of `syllable`.
    pub fn increment(
        &mut self,
        syllable: &str,
    ) {
        self.add_count(syllable, 1);
    }

    /// Append an unranked entry, last in rank order; returns its rank.
    fn push(
        &mut self,
        syllable: &str,
        count: u64,
    ) -> usize {
        let slot = self.entries.len();
        let rank = self.ranked.len() + 1;
        self.syllables.push(syllable.to_string());
        self.entries.push(VocabEntry {
            count,
            rank,
            percentile: Percentile::Unranked,
        });
        self.index.insert(syllable.to_string(), slot);
        self.ranked.push(slot);
        rank
    }

    /// The rank of `syllable`, appending it as an unranked entry if absent.
    ///
    /// A new entry has count 0, [`Percentile::Unranked`], and rank
    /// `len() + 1`; it is appended to the rank order.
    pub fn rank_or_insert(
        &mut self,
        syllable: &str,
    ) -> usize {
        if let Some(entry) = self.get(syllable) {
            return entry.rank;
        }
        self.push(syllable, 0)
    }

    /// Recompute ranks and percentiles from counts.
    ///
    /// * ranks are `1..=len()`, by descending count;
    /// * the percentile of an entry is the count mass of all entries
    ///   ranked before it, over the total count.
    pub fn process(&mut self) {
        let mut ranked: Vec<usize> = (0..self.entries.len()).collect();
        // `sort_by` is stable.
        ranked.sort_by(|&a, &b| self.entries[b].count.cmp(&self.entries[a].count));

        let total = self.total_count();
        let mut running: u64 = 0;
        for (idx, &slot) in ranked.iter().enumerate() {
            let entry = &mut self.entries[slot];
            entry.rank = idx + 1;
            entry.percentile = Percentile::Ranked(if total == 0 {
                0.0
            } else {
                running as f64 / total as f64
            });
            running += entry.count;
        }

        self.ranked = ranked;
        self.fitted = true;
    }
}
