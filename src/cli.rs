use clap::Parser;
use std::path::PathBuf;

use crate::config::UseExamples;

/// Mock data generator - synthesizes sample payloads from a schema
#[derive(Parser, Debug, Clone)]
#[command(name = "mockgen", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "MOCKGEN_CONFIG", default_value = "mockgen.toml")]
    pub config: PathBuf,

    /// When to return schema examples instead of generated data (no, if_present, exclusively)
    #[arg(long, env = "MOCKGEN_USE_EXAMPLES")]
    pub use_examples: Option<UseExamples>,

    /// Abort generation after this many milliseconds
    #[arg(long, env = "MOCKGEN_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Treat the document as a bare schema instead of a media type
    #[arg(long)]
    pub schema_only: bool,

    /// Media type or schema document (JSON or YAML)
    pub document: PathBuf,
}
