//! # Base64 Syllable Count IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{SylError, SylResult},
    types::SylHashSet,
    vocab::SyllableVocab,
};

/// Read a [`SyllableVocab`] from a base64 count line reader.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 SYLLABLE} {COUNT}
/// ```
///
/// Entries keep the line order as their insertion order,
/// and the vocabulary is ranked before it is returned.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_base64_counts<R: BufRead>(reader: R) -> SylResult<SyllableVocab> {
    let mut vocab = SyllableVocab::new();
    let mut seen = SylHashSet::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let malformed = |what: &str| SylError::Parse(format!("line {}: {what}", idx + 1));

        let (span, count) = line
            .split_once(' ')
            .ok_or_else(|| malformed("expected `{BASE64} {COUNT}`"))?;

        let span = BASE64_STANDARD
            .decode(span)
            .map_err(|e| malformed(&e.to_string()))?;
        let syllable = String::from_utf8(span).map_err(|e| malformed(&e.to_string()))?;

        let count: u64 = count
            .parse()
            .map_err(|e: core::num::ParseIntError| malformed(&e.to_string()))?;

        if !seen.insert(syllable.clone()) {
            return Err(malformed(&format!("duplicate syllable {syllable:?}")));
        }
        vocab.add_count(&syllable, count);
    }

    vocab.process();
    Ok(vocab)
}

/// Write a [`SyllableVocab`] to a [`Write`] writer.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 SYLLABLE} {COUNT}
/// ```
///
/// Entries are written in insertion order; ranks and percentiles are not written.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_base64_counts<W: Write>(
    vocab: &SyllableVocab,
    writer: &mut W,
) -> SylResult<()> {
    for (syllable, entry) in vocab.iter() {
        writeln!(
            writer,
            "{} {}",
            BASE64_STANDARD.encode(syllable.as_bytes()),
            entry.count
        )?;
    }
    Ok(())
}

/// Encode a [`SyllableVocab`] as a store payload.
pub fn vocab_to_bytes(vocab: &SyllableVocab) -> SylResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_base64_counts(vocab, &mut buf)?;
    Ok(buf)
}

/// Decode a store payload into a ranked [`SyllableVocab`].
pub fn vocab_from_bytes(bytes: &[u8]) -> SylResult<SyllableVocab> {
    read_base64_counts(bytes)
}

/// Save a [`SyllableVocab`] to a base64 count file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<P: AsRef<Path>>(
    vocab: &SyllableVocab,
    path: P,
) -> SylResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_base64_counts(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Load a [`SyllableVocab`] from a base64 count file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_path<P: AsRef<Path>>(path: P) -> SylResult<SyllableVocab> {
    let reader = BufReader::new(File::open(path)?);
    read_base64_counts(reader)
}
