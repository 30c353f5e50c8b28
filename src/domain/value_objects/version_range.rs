//! Version Range Value Object
//!
//! Interval notation used by lock-file dependency specs:
//! - `1.0` - at least 1.0.0
//! - `[1.0]` - exactly 1.0.0
//! - `[1.0, 2.0)`, `(1.0,]`, `(,2.0]` - bracketed intervals

use std::fmt;
use std::str::FromStr;

use super::version::SemanticVersion;
use crate::error::{ResolveError, ResolveResult};

/// An interval of package versions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRange {
    min: Option<SemanticVersion>,
    min_inclusive: bool,
    max: Option<SemanticVersion>,
    max_inclusive: bool,
}

impl VersionRange {
    /// Range matching exactly one version
    pub fn exact(version: SemanticVersion) -> Self {
        Self {
            min: Some(version.clone()),
            min_inclusive: true,
            max: Some(version),
            max_inclusive: true,
        }
    }

    /// Range matching `version` and everything above it
    pub fn at_least(version: SemanticVersion) -> Self {
        Self {
            min: Some(version),
            min_inclusive: true,
            max: None,
            max_inclusive: false,
        }
    }

    /// Parse a version spec string
    pub fn parse(input: &str) -> ResolveResult<Self> {
        let invalid = |message: &str| ResolveError::InvalidVersionRange {
            input: input.to_string(),
            message: message.to_string(),
        };

        let spec = input.trim();
        if spec.is_empty() {
            return Err(invalid("range is empty"));
        }

        let min_inclusive = match spec.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => return Ok(Self::at_least(SemanticVersion::parse(spec)?)),
        };

        let max_inclusive = match spec.chars().last() {
            Some(']') => true,
            Some(')') => false,
            _ => return Err(invalid("missing closing ']' or ')'")),
        };

        if spec.len() < 2 {
            return Err(invalid("range has no bounds"));
        }
        let inner = spec[1..spec.len() - 1].trim();

        let Some((left, right)) = inner.split_once(',') else {
            if !(min_inclusive && max_inclusive) {
                return Err(invalid("an exact version must be written as [x]"));
            }
            if inner.is_empty() {
                return Err(invalid("range has no bounds"));
            }
            return Ok(Self::exact(SemanticVersion::parse(inner)?));
        };

        if right.contains(',') {
            return Err(invalid("too many ',' separators"));
        }

        let bound = |s: &str| -> ResolveResult<Option<SemanticVersion>> {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                SemanticVersion::parse(s).map(Some)
            }
        };

        let min = bound(left)?;
        let max = bound(right)?;

        match (&min, &max) {
            (None, None) => return Err(invalid("range has no bounds")),
            (Some(lo), Some(hi)) => {
                if lo > hi {
                    return Err(invalid("minimum is greater than maximum"));
                }
                if lo == hi && !(min_inclusive && max_inclusive) {
                    return Err(invalid("range is empty"));
                }
            }
            _ => {}
        }

        Ok(Self {
            min,
            min_inclusive,
            max,
            max_inclusive,
        })
    }

    pub fn min(&self) -> Option<&SemanticVersion> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&SemanticVersion> {
        self.max.as_ref()
    }

    pub fn is_min_inclusive(&self) -> bool {
        self.min_inclusive
    }

    pub fn is_max_inclusive(&self) -> bool {
        self.max_inclusive
    }

    /// True if the range pins a single version
    pub fn is_exact(&self) -> bool {
        self.min_inclusive && self.max_inclusive && self.min.is_some() && self.min == self.max
    }

    /// Check whether `version` falls inside the range
    pub fn satisfies(&self, version: &SemanticVersion) -> bool {
        let above_min = match &self.min {
            Some(min) if self.min_inclusive => version >= min,
            Some(min) => version > min,
            None => true,
        };
        let below_max = match &self.max {
            Some(max) if self.max_inclusive => version <= max,
            Some(max) => version < max,
            None => true,
        };
        above_min && below_max
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            if let Some(min) = &self.min {
                return write!(f, "[{}]", min);
            }
        }

        if let (Some(min), None, true) = (&self.min, &self.max, self.min_inclusive) {
            return write!(f, "{}", min);
        }

        f.write_str(if self.min_inclusive { "[" } else { "(" })?;
        if let Some(min) = &self.min {
            write!(f, "{}", min)?;
        }
        f.write_str(", ")?;
        if let Some(max) = &self.max {
            write!(f, "{}", max)?;
        }
        f.write_str(if self.max_inclusive { "]" } else { ")" })
    }
}

impl FromStr for VersionRange {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
