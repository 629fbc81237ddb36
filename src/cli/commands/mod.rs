//! Command implementations

pub mod check;
pub mod dirs;

use crate::cli::PatternArgs;
use crate::config::IgnoreConfig;
use crate::ignore::IgnoreSet;
use anyhow::{Context, Result};

/// Merge config file and command-line patterns into an ignore set
pub(crate) fn load_ignore_set(args: &PatternArgs) -> Result<IgnoreSet> {
    let mut config = match &args.config {
        Some(path) => IgnoreConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => IgnoreConfig::default(),
    };

    config.extend_patterns(args.patterns.iter().cloned());
    if args.no_dot {
        config.options.dot = false;
    }

    let set = config.build().context("Failed to compile ignore patterns")?;
    tracing::debug!(
        patterns = set.path_patterns().len(),
        dirs = set.dir_patterns().len(),
        dot = set.options().dot,
        "built ignore set"
    );
    Ok(set)
}
