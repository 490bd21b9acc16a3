//! Insurance form number identifiers and fuzzy matching
//!
//! Endorsement form numbers ("CG 20 10") arrive from document extraction
//! with inconsistent whitespace and casing. This module canonicalizes them
//! and decides whether two free-text form numbers refer to the same
//! instrument. The matching rule is a deliberate heuristic kept in one
//! place so it can be tightened without touching the detectors above it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-text insurance form number as extracted from a document
///
/// Two form numbers identify the same instrument when their canonical
/// forms are equal, or when one compact (space-free) form is a substring
/// of the other. This tolerates extraction noise such as `"CG 20 10"` vs
/// `"CG  20  10"` vs `"CG2010"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormNumber(String);

impl FormNumber {
    /// Wraps a raw extracted form number string
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw string as extracted
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical form: whitespace runs collapsed to single spaces,
    /// trimmed, uppercased
    pub fn canonical(&self) -> String {
        self.0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase()
    }

    /// Compact form: canonical with all internal spaces removed
    pub fn compact(&self) -> String {
        self.0
            .split_whitespace()
            .collect::<String>()
            .to_uppercase()
    }

    /// Returns true if the two form numbers refer to the same instrument
    pub fn matches(&self, other: &FormNumber) -> bool {
        if self.canonical() == other.canonical() {
            return true;
        }
        let a = self.compact();
        let b = other.compact();
        if a.is_empty() || b.is_empty() {
            return false;
        }
        a.contains(&b) || b.contains(&a)
    }
}

impl fmt::Display for FormNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl From<&str> for FormNumber {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for FormNumber {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Canonicalizes a free-text identifier for equality comparison
///
/// Shared by the exclusion rows, which deduplicate by name using the same
/// whitespace/case rules as form numbers but without the substring rule.
pub fn normalize_identifier(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
