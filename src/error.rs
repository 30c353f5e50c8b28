//! Error types for pkgres
//!
//! Uses `thiserror` for library errors. Incompatible packages and cache
//! misses are not errors; they are reported through the returned values.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Main error type for resolution operations
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A hash marker exists but could not be read (anything but "not found")
    #[error("failed to read hash marker {path}: {source}")]
    HashMarkerRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package record and the target record describe different packages
    #[error("package record '{package}' does not match target record '{target}'")]
    IdentityMismatch { package: String, target: String },

    /// Version string could not be parsed
    #[error("invalid version '{input}': {message}")]
    InvalidVersion { input: String, message: String },

    /// Version range string could not be parsed
    #[error("invalid version range '{input}': {message}")]
    InvalidVersionRange { input: String, message: String },

    /// Settings file exists but is not valid
    #[error("invalid settings file {path}: {message}")]
    InvalidSettings { path: PathBuf, message: String },

    /// Servicing index line could not be parsed
    #[error("invalid servicing index {path}:{line}: {message}")]
    InvalidServicingIndex {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Neither HOME nor USERPROFILE nor the platform home directory is available
    #[error("could not determine the user home directory")]
    HomeDirectoryNotFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
