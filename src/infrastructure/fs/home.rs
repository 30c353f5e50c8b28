//! Home directory resolution.
//!
//! `HOME` is consulted first, then `USERPROFILE`, both through the injected
//! `Environment`. Only when neither is set does this fall back to
//! `dirs::home_dir()`, which on Windows asks the system API and ignores
//! environment variables.

use std::path::PathBuf;

use crate::config::HOME_VARS;
use crate::domain::ports::Environment;

/// Get the home directory used for the default package store.
///
/// # Returns
///
/// - `Some(PathBuf)` - The first non-empty `HOME` / `USERPROFILE`, else the platform home
/// - `None` - If nothing could be resolved
pub fn home_dir<E: Environment>(env: &E) -> Option<PathBuf> {
    HOME_VARS
        .iter()
        .find_map(|var| env.non_empty_var(var))
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
