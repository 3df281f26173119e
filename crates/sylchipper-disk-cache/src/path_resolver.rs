//! # App Path Resolver
//!
//! Static library defaults for data directory resolution.

use directories_next::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Static configuration for application path resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for data directories environment variables.
    pub data_env_vars: &'static [&'static str],
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.organization, self.application, self.qualifier)
    }

    /// Resolve the data directory for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.data_env_vars`; in order.
    /// 3. `self.project_dirs().data_dir()`, if present.
    /// 4. `None`
    ///
    /// ## Project Dirs Behavior
    ///
    /// |Platform | Value                                                                      | Example                                                       |
    /// | ------- | -------------------------------------------------------------------------- | ------------------------------------------------------------- |
    /// | Linux   | `$XDG_DATA_HOME`/`_project_path_` or `$HOME`/.local/share/`_project_path_` | /home/alice/.local/share/barapp                               |
    /// | macOS   | `$HOME`/Library/Application Support/`_project_path_`                       | /Users/Alice/Library/Application Support/com.Foo-Corp.Bar-App |
    /// | Windows | `{FOLDERID_LocalAppData}`\\`_project_path_`\\data                          | C:\Users\Alice\AppData\Local\Foo Corp\Bar App\data            |
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path.as_ref() {
            return Some(path.as_ref().to_path_buf());
        }

        for env_var in self.data_env_vars {
            if let Ok(path) = env::var(env_var) {
                return Some(PathBuf::from(path));
            }
        }

        self.project_dirs().map(|pds| pds.data_dir().to_path_buf())
    }
}
