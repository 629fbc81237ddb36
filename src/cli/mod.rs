//! Command-line interface for pathignore

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// pathignore - test paths against glob ignore patterns
#[derive(Parser)]
#[command(
    name = "pathignore",
    version,
    about = "Test paths against glob ignore patterns",
    long_about = "Applies ordered glob ignore patterns (with `!` negation) to paths, and derives the directory patterns a tree walker can prune with."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Pattern sources shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct PatternArgs {
    /// Ignore pattern (repeatable, applied in order after config patterns)
    #[arg(short, long = "pattern", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// TOML file with `patterns` and `[options]`
    #[arg(short, long, env = "PATHIGNORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not let wildcards match dot-prefixed segments
    #[arg(long)]
    pub no_dot: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report whether each path is ignored
    Check {
        #[command(flatten)]
        patterns: PatternArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Paths to test
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the directory patterns derived from the pattern set
    Dirs {
        #[command(flatten)]
        patterns: PatternArgs,
    },
}
