//! # Sylchipper Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{SYLCHIPPER_CACHE_CONFIG, path_utils};

/// Options for [`SylchipperDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct SylchipperDiskCacheOptions {
    /// Optional path to the data directory.
    pub data_dir: Option<PathBuf>,
}

impl SylchipperDiskCacheOptions {
    /// Set the data directory.
    pub fn with_data_dir<P: AsRef<Path>>(
        mut self,
        data_dir: Option<P>,
    ) -> Self {
        self.data_dir = data_dir.map(|p| p.as_ref().to_path_buf());
        self
    }
}

/// Disk storage for persisted files.
///
/// Leverages [`PathResolver`](`crate::path_resolver::PathResolver`) for resolving
/// a data path appropriate for a user/system combo, and any environment overrides.
#[derive(Clone, Debug)]
pub struct SylchipperDiskCache {
    /// Data directory.
    data_dir: PathBuf,
}

impl SylchipperDiskCache {
    /// Construct a new [`SylchipperDiskCache`].
    pub fn new(options: SylchipperDiskCacheOptions) -> anyhow::Result<Self> {
        let data_dir = SYLCHIPPER_CACHE_CONFIG
            .resolve_data_dir(options.data_dir)
            .context("failed to resolve data directory")?;

        Ok(Self { data_dir })
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the data path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between `self.data_dir` and `file`.
    /// * `file` - the final file name.
    pub fn data_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.data_dir, context, file)
    }

    /// Read a data file, if it exists.
    ///
    /// # Returns
    /// * `Ok(None)` if there is no file at the data path.
    /// * `Ok(Some(bytes))` with the file contents.
    /// * An error if the file exists but cannot be read.
    pub fn load_data<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> anyhow::Result<Option<Vec<u8>>>
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        let path = self.data_path(context, file);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(bytes))
    }

    /// Write a data file, creating the containing directories.
    ///
    /// The bytes are staged in a sibling file and renamed into place,
    /// so readers never observe a partial write.
    ///
    /// # Returns
    /// The path of the written file.
    pub fn store_data<C, F>(
        &self,
        context: &[C],
        file: F,
        bytes: &[u8],
    ) -> anyhow::Result<PathBuf>
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        let path = self.data_path(context, file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let staging = path_utils::staging_path(&path);
        fs::write(&staging, bytes)
            .with_context(|| format!("failed to write {}", staging.display()))?;
        fs::rename(&staging, &path)
            .with_context(|| format!("failed to move {} into place", path.display()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf};

    use serial_test::serial;

    use crate::{
        SYLCHIPPER_CACHE_CONFIG,
        SYLCHIPPER_DATA_DIR,
        disk_cache::{SylchipperDiskCache, SylchipperDiskCacheOptions},
    };

    #[test]
    #[serial]
    fn test_resolve_dirs() {
        let orig_data_dir = env::var(SYLCHIPPER_DATA_DIR);

        let pds = SYLCHIPPER_CACHE_CONFIG
            .project_dirs()
            .expect("failed to get project dirs");

        let user_data_dir = PathBuf::from("/tmp/sylchipper/data");
        let env_data_dir = PathBuf::from("/tmp/sylchipper/env_data");

        // No env vars
        unsafe {
            env::remove_var(SYLCHIPPER_DATA_DIR);
        }

        let cache = SylchipperDiskCache::new(
            SylchipperDiskCacheOptions::default().with_data_dir(Some(user_data_dir.clone())),
        )
        .unwrap();
        assert_eq!(&cache.data_dir(), &user_data_dir);

        let cache = SylchipperDiskCache::new(SylchipperDiskCacheOptions::default()).unwrap();
        assert_eq!(&cache.data_dir(), &pds.data_dir().to_path_buf());

        // With env var.
        unsafe {
            env::set_var(SYLCHIPPER_DATA_DIR, env_data_dir.to_str().unwrap());
        }

        let cache = SylchipperDiskCache::new(
            SylchipperDiskCacheOptions::default().with_data_dir(Some(user_data_dir.clone())),
        )
        .unwrap();
        assert_eq!(&cache.data_dir(), &user_data_dir);

        let cache = SylchipperDiskCache::new(SylchipperDiskCacheOptions::default()).unwrap();
        assert_eq!(&cache.data_dir(), &env_data_dir);

        // restore original env var.
        match orig_data_dir {
            Ok(original) => unsafe { env::set_var(SYLCHIPPER_DATA_DIR, original) },
            Err(_) => unsafe { env::remove_var(SYLCHIPPER_DATA_DIR) },
        }
    }

    #[test]
    fn test_data_path() {
        let cache = SylchipperDiskCache::new(
            SylchipperDiskCacheOptions::default().with_data_dir(Some("/tmp/sylchipper/data")),
        )
        .unwrap();
        let path = cache.data_path(&["prefix"], "file.txt");
        assert_eq!(path, cache.data_dir.join("prefix").join("file.txt"));
    }

    #[test]
    fn test_store_load_data() {
        tempdir::TempDir::new("disk_cache_test")
            .and_then(|dir| {
                let cache = SylchipperDiskCache::new(
                    SylchipperDiskCacheOptions::default().with_data_dir(Some(dir.path())),
                )
                .unwrap();

                assert_eq!(cache.load_data(&["vocab"], "tr.syllable.vec").unwrap(), None);

                let path = cache
                    .store_data(&["vocab"], "tr.syllable.vec", b"a2k= 2\n")
                    .unwrap();
                assert_eq!(path, dir.path().join("vocab").join("tr.syllable.vec"));

                assert_eq!(
                    cache.load_data(&["vocab"], "tr.syllable.vec").unwrap(),
                    Some(b"a2k= 2\n".to_vec())
                );

                // Overwrites replace the previous payload.
                cache.store_data(&["vocab"], "tr.syllable.vec", b"").unwrap();
                assert_eq!(
                    cache.load_data(&["vocab"], "tr.syllable.vec").unwrap(),
                    Some(Vec::new())
                );

                Ok(())
            })
            .unwrap();
    }
}
