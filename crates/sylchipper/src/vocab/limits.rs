//! # Syllable Limits
//!
//! Rank, percentile, or count thresholds used to decide which
//! segmented syllables a tokenizer keeps.

use core::str::FromStr;

use crate::{
    errors::{SylError, SylResult},
    vocab::VocabEntry,
};

/// The named limit modes.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum LimitBy {
    /// Keep every syllable.
    #[default]
    None,

    /// Keep the most frequent syllables, by rank.
    Vocabulary,

    /// Keep syllables below a cumulative frequency mass.
    Percentile,

    /// Keep syllables seen more than a minimum number of times.
    Count,
}

impl LimitBy {
    /// Parse a limit mode name.
    ///
    /// ## Returns
    /// The mode, or [`SylError::UnsupportedLimitMode`].
    pub fn from_name(name: &str) -> SylResult<Self> {
        Self::from_str(name).map_err(|_| SylError::UnsupportedLimitMode(name.to_string()))
    }
}

/// A typed syllable threshold.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum SyllableLimit {
    /// Keep every syllable, known or not.
    #[default]
    Unlimited,

    /// Keep syllables with `rank < n`.
    Vocabulary(usize),

    /// Keep syllables with `percentile < p`.
    Percentile(f64),

    /// Keep syllables with `count > c`.
    Count(u64),
}

impl SyllableLimit {
    /// Build a limit from a mode and a numeric threshold.
    ///
    /// * `limit` must be finite and non-negative;
    /// * percentile limits must lie in `[0, 1]`;
    /// * vocabulary limits round up and count limits round down,
    ///   which keeps the integer comparison equal to the numeric one.
    ///
    /// The threshold is ignored for [`LimitBy::None`].
    pub fn new(
        mode: LimitBy,
        limit: f64,
    ) -> SylResult<Self> {
        if mode == LimitBy::None {
            return Ok(Self::Unlimited);
        }

        let invalid = || SylError::InvalidLimit {
            mode: mode.to_string(),
            limit,
        };
        if !limit.is_finite() || limit < 0.0 {
            return Err(invalid());
        }

        Ok(match mode {
            LimitBy::None => Self::Unlimited,
            LimitBy::Vocabulary => Self::Vocabulary(limit.ceil() as usize),
            LimitBy::Percentile if limit > 1.0 => return Err(invalid()),
            LimitBy::Percentile => Self::Percentile(limit),
            LimitBy::Count => Self::Count(limit.floor() as u64),
        })
    }

    /// Parse a limit from a mode name and a numeric threshold.
    ///
    /// See [`new`](Self::new).
    pub fn parse(
        mode: &str,
        limit: f64,
    ) -> SylResult<Self> {
        Self::new(LimitBy::from_name(mode)?, limit)
    }

    /// The mode of this limit.
    pub fn mode(&self) -> LimitBy {
        match self {
            Self::Unlimited => LimitBy::None,
            Self::Vocabulary(_) => LimitBy::Vocabulary,
            Self::Percentile(_) => LimitBy::Percentile,
            Self::Count(_) => LimitBy::Count,
        }
    }

    /// Is this limit a filter at all?
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Does a syllable with `entry` pass this limit?
    ///
    /// A syllable missing from the vocabulary (`None`) passes only
    /// when unlimited.
    pub fn allows(
        &self,
        entry: Option<&VocabEntry>,
    ) -> bool {
        let entry = match (self, entry) {
            (Self::Unlimited, _) => return true,
            (_, None) => return false,
            (_, Some(entry)) => entry,
        };

        match self {
            Self::Unlimited => true,
            Self::Vocabulary(n) => entry.rank < *n,
            Self::Percentile(p) => entry.percentile.is_below(*p),
            Self::Count(c) => entry.count > *c,
        }
    }
}
