use sylchipper::disk_cache::{SylchipperDiskCache, SylchipperDiskCacheOptions};

/// Data directory argument group.
#[derive(clap::Args, Debug)]
pub struct DataDirArgs {
    /// Data directory; defaults to `$SYLCHIPPER_DATA_DIR`, then the user data dir.
    #[arg(long, default_value = None)]
    data_dir: Option<String>,
}

impl DataDirArgs {
    /// Initialize the vocabulary store.
    pub fn init_disk_cache(&self) -> Result<SylchipperDiskCache, Box<dyn std::error::Error>> {
        let options = SylchipperDiskCacheOptions::default().with_data_dir(self.data_dir.clone());
        let disk_cache = SylchipperDiskCache::new(options)?;
        log::debug!("data dir: {}", disk_cache.data_dir().display());
        Ok(disk_cache)
    }
}
