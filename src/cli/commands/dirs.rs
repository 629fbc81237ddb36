//! Dirs command implementation

use crate::cli::commands::load_ignore_set;
use crate::cli::PatternArgs;
use anyhow::Result;

/// Execute the dirs command
pub fn execute(patterns: PatternArgs) -> Result<()> {
    let set = load_ignore_set(&patterns)?;

    for pattern in set.dir_patterns() {
        println!("{}", pattern.raw());
    }

    Ok(())
}
