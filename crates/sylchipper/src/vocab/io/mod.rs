//! # Vocabulary IO

mod base64_counts;

#[doc(inline)]
pub use base64_counts::{
    load_vocab_path,
    read_base64_counts,
    save_vocab_path,
    vocab_from_bytes,
    vocab_to_bytes,
    write_base64_counts,
};
