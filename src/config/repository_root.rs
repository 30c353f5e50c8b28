//! Package-store root resolution
//!
//! Precedence, first present and non-empty value wins:
//! 1. `packages` in the nearest `global.json` (walking up from the project),
//!    relative to that file's directory
//! 2. `NUGET_PACKAGES`
//! 3. `DNX_PACKAGES`
//! 4. `~/.dnx/packages` (`HOME`, then `USERPROFILE`, then the platform home)

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{Environment, FileSystem};
use crate::error::{ResolveError, ResolveResult};
use crate::infrastructure::fs::{home_dir, LocalFs};
use crate::infrastructure::settings::GlobalSettings;

use super::loader::{DEFAULT_PACKAGES_DIR, DEFAULT_RUNTIME_HOME_DIR, LEGACY_PACKAGES_VAR, PACKAGES_VAR};

/// Determine which directory holds the package store for `project_root`
pub fn resolve_repository_root<E: Environment>(
    project_root: &Path,
    env: &E,
) -> ResolveResult<PathBuf> {
    resolve_repository_root_with_fs(project_root, env, &LocalFs::new())
}

/// `resolve_repository_root` with settings discovery through `fs`
pub fn resolve_repository_root_with_fs<E: Environment, F: FileSystem>(
    project_root: &Path,
    env: &E,
    fs: &F,
) -> ResolveResult<PathBuf> {
    if let Some(settings) = GlobalSettings::find_with_fs(project_root, fs)? {
        if let Some(packages) = settings.packages_path() {
            let root = settings.directory().join(packages);
            debug!(
                settings = %settings.file_path().display(),
                root = %root.display(),
                "package store root from settings file"
            );
            return Ok(root);
        }
    }

    for var in [PACKAGES_VAR, LEGACY_PACKAGES_VAR] {
        if let Some(value) = env.non_empty_var(var) {
            debug!(var, root = %value, "package store root from environment");
            return Ok(PathBuf::from(value));
        }
    }

    let home = home_dir(env).ok_or(ResolveError::HomeDirectoryNotFound)?;
    let root = home.join(DEFAULT_RUNTIME_HOME_DIR).join(DEFAULT_PACKAGES_DIR);
    debug!(root = %root.display(), "package store root defaulted to home directory");
    Ok(root)
}
