//! # Vocabulary Entry Statistics

/// Cumulative frequency mass preceding an entry, in rank order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Percentile {
    /// A computed percentile in `[0, 1)`.
    Ranked(f64),

    /// The entry was added after the last ranking pass,
    /// and sorts after every ranked entry.
    Unranked,
}

impl Percentile {
    /// The computed value; `None` when unranked.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Ranked(p) => Some(*p),
            Self::Unranked => None,
        }
    }

    /// Is this percentile strictly below `limit`?
    ///
    /// Unranked entries are never below any limit.
    pub fn is_below(
        &self,
        limit: f64,
    ) -> bool {
        match self {
            Self::Ranked(p) => *p < limit,
            Self::Unranked => false,
        }
    }
}

/// Per-syllable statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VocabEntry {
    /// Occurrence count in the fitting corpus.
    pub count: u64,

    /// 1-based rank; 1 is the most frequent entry.
    pub rank: usize,

    /// See [`Percentile`].
    pub percentile: Percentile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile() {
        assert_eq!(Percentile::Ranked(0.25).value(), Some(0.25));
        assert_eq!(Percentile::Unranked.value(), None);

        assert!(Percentile::Ranked(0.25).is_below(0.5));
        assert!(!Percentile::Ranked(0.5).is_below(0.5));
        assert!(!Percentile::Unranked.is_below(1.0));
        assert!(!Percentile::Unranked.is_below(f64::MAX));
    }
}
