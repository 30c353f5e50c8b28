//! Assembly Identity Value Object
//!
//! Key type of the assembly load map. Two packages may ship differently
//! cased names for the same logical assembly, so name and culture both
//! compare ordinally ignoring case.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Simple assembly name plus culture (empty for culture-neutral)
#[derive(Debug, Clone)]
pub struct AssemblyIdentity {
    name: String,
    culture: String,
}

impl AssemblyIdentity {
    /// Culture-neutral identity
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            culture: String::new(),
        }
    }

    /// Identity for a satellite (resource) assembly
    pub fn with_culture(name: impl Into<String>, culture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            culture: culture.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Culture tag, empty when neutral
    pub fn culture(&self) -> &str {
        &self.culture
    }

    pub fn is_neutral(&self) -> bool {
        self.culture.is_empty()
    }
}

/// Simple (one-to-one) uppercase mapping, so `ß` stays `ß`.
fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(|c| {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => c,
        }
    })
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || fold(a).eq(fold(b))
}

impl PartialEq for AssemblyIdentity {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.name, &other.name) && eq_ignore_case(&self.culture, &other.culture)
    }
}

impl Eq for AssemblyIdentity {}

impl Hash for AssemblyIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in fold(&self.name) {
            c.hash(state);
        }
        // separator keeps ("ab", "") and ("a", "b") apart
        0xffu8.hash(state);
        for c in fold(&self.culture) {
            c.hash(state);
        }
    }
}

impl fmt::Display for AssemblyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.culture.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.culture)
        }
    }
}
