//! Semantic Version Value Object
//!
//! Package versions as they appear in lock files:
//! `major.minor.patch[.revision][-prerelease][+metadata]`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use semver::{BuildMetadata, Prerelease};

use crate::error::{ResolveError, ResolveResult};

/// A package version
///
/// Equality, hashing and ordering ignore build metadata and the original
/// spelling. A prerelease sorts before the release with the same numeric
/// parts.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    /// Text as written in the lock file; names the package folder on disk
    original: String,
    major: u64,
    minor: u64,
    patch: u64,
    revision: u64,
    pre: Prerelease,
    build: BuildMetadata,
}

impl SemanticVersion {
    /// Create a release version with no revision
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            original: format!("{}.{}.{}", major, minor, patch),
            major,
            minor,
            patch,
            revision: 0,
            pre: Prerelease::EMPTY,
            build: BuildMetadata::EMPTY,
        }
    }

    /// Parse a version string
    ///
    /// One- and two-part versions are padded with zeros (`1.2` is `1.2.0`).
    pub fn parse(input: &str) -> ResolveResult<Self> {
        let invalid = |message: &str| ResolveError::InvalidVersion {
            input: input.to_string(),
            message: message.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid("version is empty"));
        }

        let (rest, build) = match trimmed.split_once('+') {
            Some((rest, meta)) => (
                rest,
                BuildMetadata::new(meta).map_err(|e| invalid(&e.to_string()))?,
            ),
            None => (trimmed, BuildMetadata::EMPTY),
        };

        let (numbers, pre) = match rest.split_once('-') {
            Some((numbers, label)) => (
                numbers,
                Prerelease::new(label).map_err(|e| invalid(&e.to_string()))?,
            ),
            None => (rest, Prerelease::EMPTY),
        };

        let parts = numbers
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| invalid(&format!("'{}' is not a number", part)))
            })
            .collect::<ResolveResult<Vec<u64>>>()?;

        if parts.len() > 4 {
            return Err(invalid("at most four numeric parts are allowed"));
        }

        let part = |idx: usize| parts.get(idx).copied().unwrap_or(0);

        Ok(Self {
            original: trimmed.to_string(),
            major: part(0),
            minor: part(1),
            patch: part(2),
            revision: part(3),
            pre,
            build,
        })
    }

    /// Add a prerelease label
    pub fn with_prerelease(mut self, label: &str) -> ResolveResult<Self> {
        self.pre = Prerelease::new(label).map_err(|e| ResolveError::InvalidVersion {
            input: format!("{}-{}", self, label),
            message: e.to_string(),
        })?;
        self.original = self.to_string();
        Ok(self)
    }

    /// Version text as originally written (`1.0`, `1.0.0.0`, `1.0.0+abc`)
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Prerelease label, empty for a release
    pub fn prerelease(&self) -> &str {
        self.pre.as_str()
    }

    /// Build metadata, empty when absent
    pub fn metadata(&self) -> &str {
        self.build.as_str()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    fn numeric(&self) -> (u64, u64, u64, u64) {
        (self.major, self.minor, self.patch, self.revision)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.numeric() == other.numeric() && self.pre == other.pre
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numeric().hash(state);
        self.pre.hash(state);
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric()
            .cmp(&other.numeric())
            .then_with(|| self.pre.cmp(&other.pre))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.revision != 0 {
            write!(f, ".{}", self.revision)?;
        }
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
