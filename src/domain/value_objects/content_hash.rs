//! Content Hash Value Object
//!
//! The archive hash recorded for a package in the lock file. Cache roots
//! store the same string in a hash-marker file next to the extracted
//! package; a cache entry is valid only when the two strings are identical.

use std::fmt;

/// Expected content hash of a package archive
///
/// Opaque to this crate: no re-hashing happens at resolve time, and
/// comparison is exact (no trimming, no case folding).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ContentHash(String);

impl ContentHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check the content of a hash-marker file against this hash
    pub fn matches_str(&self, marker: &str) -> bool {
        self.0 == marker
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
