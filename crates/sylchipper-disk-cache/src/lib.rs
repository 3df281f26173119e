//! # sylchipper-disk-cache
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod disk_cache;
pub mod path_resolver;
pub mod path_utils;

pub use disk_cache::{SylchipperDiskCache, SylchipperDiskCacheOptions};

/// Environment variable key to override the default data directory.
pub const SYLCHIPPER_DATA_DIR: &str = "SYLCHIPPER_DATA_DIR";

/// Default [`PathResolver`] for sylchipper.
pub const SYLCHIPPER_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.sylchipper",
    organization: "",
    application: "sylchipper",
    data_env_vars: &[SYLCHIPPER_DATA_DIR],
};
