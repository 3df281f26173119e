//! # Syllable Vocabulary
//!
//! The vocabulary maps syllables (and special-character pieces) to
//! ``{ count, rank, percentile }`` statistics:
//! * [`SyllableVocab`] - the map, and its rank order.
//! * [`SyllableLimit`] - rank/percentile/count filters over entries.
//! * [`io`] - the byte format used by vocabulary stores.

pub mod io;

mod limits;
mod syllable_vocab;
mod vocab_entry;

#[doc(inline)]
pub use limits::{LimitBy, SyllableLimit};
#[doc(inline)]
pub use syllable_vocab::SyllableVocab;
#[doc(inline)]
pub use vocab_entry::{Percentile, VocabEntry};
