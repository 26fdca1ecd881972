use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "book-etl")]
#[command(about = "Validate, filter and transform a batch of books")]
pub struct CliConfig {
    /// Input JSON file (overrides io.input_path)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output CSV file (overrides io.output_path)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Author substrings to exclude, added to the configured list
    #[arg(long, value_delimiter = ',')]
    pub exclude_author: Vec<String>,

    #[arg(long, help = "Match excluded author names case-sensitively")]
    pub case_sensitive: bool,

    #[arg(long, help = "Trim fields and collapse description whitespace")]
    pub normalize: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
