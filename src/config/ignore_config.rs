//! Ignore configuration loaded from TOML
//!
//! ```toml
//! patterns = ["build/**/*", "!build/keep/file.txt"]
//!
//! [options]
//! dot = true
//! ```

use crate::config::MatchOptions;
use crate::core::error::{PathIgnoreError, Result};
use crate::ignore::IgnoreSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pattern list plus the options to compile it with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Ordered ignore patterns; `!` prefix re-includes
    pub patterns: Vec<String>,
    /// Glob matching options
    pub options: MatchOptions,
}

impl IgnoreConfig {
    pub fn new(patterns: Vec<String>, options: MatchOptions) -> Self {
        Self { patterns, options }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PathIgnoreError::ConfigurationError {
            reason: format!("Failed to parse ignore config: {}", e),
        })
    }

    /// Load configuration from a TOML file
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PathIgnoreError::ConfigurationError {
            reason: format!("Failed to serialize ignore config: {}", e),
        })
    }

    /// Append patterns after the configured ones
    pub fn extend_patterns<I: IntoIterator<Item = String>>(&mut self, patterns: I) {
        self.patterns.extend(patterns);
    }

    /// Compile the configured patterns
    pub fn build(&self) -> Result<IgnoreSet> {
        IgnoreSet::new(&self.patterns, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_config() {
        let config = IgnoreConfig::from_toml_str(
            r#"
patterns = ["dist/**", "!dist/keep.txt"]

[options]
dot = false
case_sensitive = false
"#,
        )
        .unwrap();

        assert_eq!(config.patterns, vec!["dist/**", "!dist/keep.txt"]);
        assert_eq!(
            config.options,
            MatchOptions {
                dot: false,
                case_sensitive: false
            }
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = IgnoreConfig::from_toml_str("patterns = [\"*.log\"]").unwrap();
        assert_eq!(config.options, MatchOptions::default());

        let config = IgnoreConfig::from_toml_str("").unwrap();
        assert!(config.patterns.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = IgnoreConfig::from_toml_str("patterns = 3").unwrap_err();
        assert!(matches!(err, PathIgnoreError::ConfigurationError { .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = IgnoreConfig::new(vec!["build/**/*".into()], MatchOptions::default().with_dot(false));
        let parsed = IgnoreConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_build_ignore_set() {
        let config = IgnoreConfig::new(vec!["build/**/*".into()], MatchOptions::default());
        let set = config.build().unwrap();
        assert!(set.is_dir_ignored("build"));
    }
}
