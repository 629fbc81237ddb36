//! Check command implementation

use crate::cli::commands::load_ignore_set;
use crate::cli::PatternArgs;
use anyhow::Result;
use serde_json::json;

/// Execute the check command
pub fn execute(patterns: PatternArgs, json: bool, paths: Vec<String>) -> Result<()> {
    let set = load_ignore_set(&patterns)?;

    if json {
        let results: Vec<_> = paths
            .iter()
            .map(|path| json!({ "path": path, "ignored": set.is_ignored(path) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for path in &paths {
        let verdict = if set.is_ignored(path) { "ignored" } else { "kept" };
        println!("{}\t{}", verdict, path);
    }

    Ok(())
}
