//! Glob matching options
//!
//! Options are passed explicitly to every compilation call. There is no
//! process-wide default; `MatchOptions::default()` is the only source of
//! defaults.

use serde::{Deserialize, Serialize};

/// Options controlling how raw glob strings are compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Let wildcards match path segments starting with `.` (e.g. `.git`)
    pub dot: bool,
    /// Compare literal characters case-sensitively
    pub case_sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            dot: true,
            case_sensitive: true,
        }
    }
}

impl MatchOptions {
    /// Builder-style setter for `dot`
    pub fn with_dot(mut self, dot: bool) -> Self {
        self.dot = dot;
        self
    }

    /// Builder-style setter for `case_sensitive`
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Options handed to the glob engine.
    ///
    /// Separators are always literal so that `*` and `?` stay within one
    /// path segment and only `**` crosses directories.
    pub(crate) fn to_glob(self) -> glob::MatchOptions {
        glob::MatchOptions {
            case_sensitive: self.case_sensitive,
            require_literal_separator: true,
            require_literal_leading_dot: !self.dot,
        }
    }
}
