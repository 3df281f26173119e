//! # Path Utilities

use std::path::{Path, PathBuf};

/// Extend a path with a context and filename.
///
/// * Does not check that the path exists.
/// * Does not initialize the containing directories.
///
/// # Arguments
/// * `path` - the base directory.
/// * `context` - prefix dirs, inserted between `path` and `filename`.
/// * `filename` - the final file name.
pub fn extend_path<P, S, F>(
    path: P,
    context: &[S],
    filename: F,
) -> PathBuf
where
    P: AsRef<Path>,
    S: AsRef<Path>,
    F: AsRef<Path>,
{
    let mut path = path.as_ref().to_path_buf();
    path.extend(context.iter().map(|s| s.as_ref()));
    path.push(filename.as_ref());
    path
}

/// The sibling path used to stage a write to `path`.
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}
