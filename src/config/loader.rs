//! Configuration loading from the injected environment

use std::path::{Path, PathBuf};

use crate::domain::ports::Environment;
use crate::error::ResolveResult;

use super::repository_root::resolve_repository_root;
use super::types::ResolverConfig;

/// Primary package-store root
pub const PACKAGES_VAR: &str = "NUGET_PACKAGES";
/// Legacy alias of `PACKAGES_VAR`
pub const LEGACY_PACKAGES_VAR: &str = "DNX_PACKAGES";
/// `;`-separated list of cache roots
pub const PACKAGES_CACHE_VAR: &str = "DNX_PACKAGES_CACHE";
/// Directory holding the servicing `index.txt`
pub const SERVICING_VAR: &str = "DNX_SERVICING";
/// Home directory variables, in lookup order
pub const HOME_VARS: [&str; 2] = ["HOME", "USERPROFILE"];
/// Runtime home folder under the user's home directory
pub const DEFAULT_RUNTIME_HOME_DIR: &str = ".dnx";
/// Store folder under the runtime home folder
pub const DEFAULT_PACKAGES_DIR: &str = "packages";

/// Resolve the store root for `project_root` and apply env overrides
pub fn load<E: Environment>(project_root: &Path, env: &E) -> ResolveResult<ResolverConfig> {
    let packages_path = resolve_repository_root(project_root, env)?;
    Ok(with_env_overrides(ResolverConfig::new(packages_path), env))
}

/// Apply environment overrides (`DNX_PACKAGES_CACHE`)
pub fn with_env_overrides<E: Environment>(config: ResolverConfig, env: &E) -> ResolverConfig {
    match env.non_empty_var(PACKAGES_CACHE_VAR) {
        Some(value) => config.with_cache_roots(parse_cache_roots(&value)),
        None => config,
    }
}

/// Split a `;`-separated root list, dropping empty segments
pub fn parse_cache_roots(value: &str) -> Vec<PathBuf> {
    value
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(PathBuf::from)
        .collect()
}
