//! Servicing index loader
//!
//! Reads `<servicing dir>/index.txt` into a `ServicingTable`:
//!
//! ```text
//! # comment
//! nupkg|<name>|<version>|<relative asset path>=<replacement path>
//! ```
//!
//! Relative replacement paths are resolved against the servicing directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::SERVICING_VAR;
use crate::domain::entities::ServicingTable;
use crate::domain::ports::{Environment, FileSystem};
use crate::domain::value_objects::asset_path::join_asset_path;
use crate::domain::value_objects::SemanticVersion;
use crate::error::{ResolveError, ResolveResult};
use crate::infrastructure::fs::LocalFs;

/// Index file name inside the servicing directory
pub const SERVICING_INDEX_FILE_NAME: &str = "index.txt";

const PACKAGE_ENTRY_KIND: &str = "nupkg";

/// Loader for servicing index files
pub struct ServicingIndex;

impl ServicingIndex {
    /// Load the table named by `DNX_SERVICING`, or an empty one if unset
    pub fn from_environment<E: Environment>(env: &E) -> ResolveResult<ServicingTable> {
        Self::from_environment_with_fs(env, &LocalFs::new())
    }

    /// `from_environment` through a custom file system
    pub fn from_environment_with_fs<E: Environment, F: FileSystem>(
        env: &E,
        fs: &F,
    ) -> ResolveResult<ServicingTable> {
        match env.non_empty_var(SERVICING_VAR) {
            Some(dir) => Self::load_with_fs(Path::new(&dir), fs),
            None => Ok(ServicingTable::empty()),
        }
    }

    /// Load `<dir>/index.txt`; a missing index is an empty table
    pub fn load(dir: &Path) -> ResolveResult<ServicingTable> {
        Self::load_with_fs(dir, &LocalFs::new())
    }

    /// `load` through a custom file system
    pub fn load_with_fs<F: FileSystem>(dir: &Path, fs: &F) -> ResolveResult<ServicingTable> {
        let index_path = dir.join(SERVICING_INDEX_FILE_NAME);
        let content = match fs.read_to_string(&index_path) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => {
                debug!(path = %index_path.display(), "no servicing index");
                return Ok(ServicingTable::empty());
            }
            Err(e) => return Err(ResolveError::Io(e.into_io())),
        };
        Self::parse(dir, &index_path, &content)
    }

    /// Parse index content; `index_path` is only used in error messages
    pub fn parse(dir: &Path, index_path: &Path, content: &str) -> ResolveResult<ServicingTable> {
        let mut builder = ServicingTable::builder();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let invalid = |message: &str| ResolveError::InvalidServicingIndex {
                path: index_path.to_path_buf(),
                line: idx + 1,
                message: message.to_string(),
            };

            let (kind, rest) = line.split_once('|').ok_or_else(|| invalid("missing '|'"))?;
            if kind != PACKAGE_ENTRY_KIND {
                warn!(
                    path = %index_path.display(),
                    line = idx + 1,
                    kind,
                    "skipping servicing entry of unknown kind"
                );
                continue;
            }

            let fields: Vec<&str> = rest.split('|').collect();
            let [name, version, mapping] = fields.as_slice() else {
                return Err(invalid("expected nupkg|<name>|<version>|<path>=<replacement>"));
            };

            let (asset, replacement) = mapping
                .split_once('=')
                .ok_or_else(|| invalid("missing '=' between asset path and replacement"))?;
            let (name, asset, replacement) = (name.trim(), asset.trim(), replacement.trim());
            if name.is_empty() || asset.is_empty() || replacement.is_empty() {
                return Err(invalid("empty package name, asset path or replacement"));
            }

            let version = SemanticVersion::parse(version).map_err(|e| invalid(&e.to_string()))?;

            builder.insert(name, &version, asset, resolve_replacement(dir, replacement));
        }

        let table = builder.build();
        debug!(
            path = %index_path.display(),
            entries = table.len(),
            "loaded servicing index"
        );
        Ok(table)
    }
}

fn resolve_replacement(dir: &Path, replacement: &str) -> PathBuf {
    let path = Path::new(replacement);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        join_asset_path(dir, replacement)
    }
}
