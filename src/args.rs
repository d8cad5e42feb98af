use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tubescout",
    about = "Analyze a YouTube channel's recent uploads and score collaboration fit",
    version,
    long_about = None
)]
pub struct Args {
    /// Channel to analyze: a handle like "@name" or a full channel URL
    pub channel: Option<String>,

    /// Number of recent videos to sample
    #[arg(short, long, default_value_t = 5)]
    pub count: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 15)]
    pub timeout: u64,

    /// Print a JSON dump of the result record after the report
    #[arg(long)]
    pub json: bool,

    /// Path to a custom keyword file
    #[arg(short, long)]
    pub keywords: Option<PathBuf>,

    /// Initialize keywords.txt with the default keyword sets
    #[arg(long)]
    pub init: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
