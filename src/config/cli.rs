use crate::domain::model::Variant;
use clap::Parser;
use std::path::PathBuf;

/// With no arguments, normalizes the built-in target list in the current
/// directory using the `tag-color` rules.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "color-normalizer")]
#[command(about = "Normalize ANSI color tags in C++ console log statements")]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Built-in rule set to apply
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Directory the target names are resolved against
    #[arg(long)]
    pub dir: Option<String>,

    /// Comma separated list of files to process
    #[arg(long, value_delimiter = ',')]
    pub targets: Vec<String>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit diagnostics as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}
