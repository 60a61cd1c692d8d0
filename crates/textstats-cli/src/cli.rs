use clap::{Parser, Subcommand};
use textstats_core::DEFAULT_TOP_N;

/// Descriptive text statistics tool
#[derive(Parser, Debug)]
#[command(name = "textstats", version)]
#[command(about = "Descriptive text statistics tool")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the full statistics report for each input
    Analyze(AnalyzeArgs),
    /// List the most frequent words of each input
    Top(TopArgs),
    /// Analyze a built-in sample paragraph
    Sample(SampleArgs),
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Input files (use - for stdin; reads stdin when omitted)
    pub files: Vec<String>,

    /// Only report these statistics (repeatable), e.g. word_count
    #[arg(short, long = "stat")]
    pub stats: Vec<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct TopArgs {
    /// Input files (use - for stdin; reads stdin when omitted)
    pub files: Vec<String>,

    /// Number of words to list
    #[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_N)]
    pub limit: usize,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct SampleArgs {
    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
