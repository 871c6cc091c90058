use clap::Parser;
use std::path::PathBuf;

use ytsum::summarize::SummaryLength;

#[derive(Parser)]
#[command(name = "ytsum", about = "Summarize YouTube videos from their captions", version)]
pub struct Cli {
    /// YouTube video URL or video ID (reads from stdin if omitted)
    pub url: Option<String>,

    /// Summary length
    #[arg(short = 'L', long, value_enum, default_value_t = SummaryLength::Short)]
    pub length: SummaryLength,

    /// Preferred caption language (falls back to config default_lang, then "en")
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Model config file (default: ~/.config/ytsum/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the summary to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also print the fetched transcript before the summary
    #[arg(long)]
    pub show_transcript: bool,

    /// Show resolution and fetch details
    #[arg(short, long)]
    pub verbose: bool,
}
