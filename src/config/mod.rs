//! Configuration module
//!
//! Resolution settings come from, highest priority first:
//! 1. Explicit values passed to `ResolverConfig` builders
//! 2. `global.json` next to (or above) the project
//! 3. Environment variables (`NUGET_PACKAGES`, `DNX_PACKAGES`, `DNX_PACKAGES_CACHE`)
//! 4. Built-in defaults (`~/.dnx/packages`)
//!
//! All environment access goes through an injected `Environment`.

mod loader;
mod repository_root;
mod types;

pub use loader::{
    load, parse_cache_roots, with_env_overrides, DEFAULT_PACKAGES_DIR, DEFAULT_RUNTIME_HOME_DIR,
    HOME_VARS, LEGACY_PACKAGES_VAR, PACKAGES_CACHE_VAR, PACKAGES_VAR, SERVICING_VAR,
};
pub use repository_root::{resolve_repository_root, resolve_repository_root_with_fs};
pub use types::ResolverConfig;
