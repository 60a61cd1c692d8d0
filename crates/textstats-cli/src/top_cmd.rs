use std::process::ExitCode;

use serde::Serialize;
use textstats_core::{WordFrequency, most_common_words};
use tracing::debug;

use crate::cli::TopArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{input_sources, read_input, source_label, to_json_line};

#[derive(Debug, Serialize)]
struct TopOutput<'a> {
    source: &'a str,
    limit: usize,
    words: Vec<WordFrequency>,
}

pub fn run_top(args: TopArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    for source in input_sources(&args.files) {
        let text = read_input(source)?;
        let words = most_common_words(&text, args.limit);
        debug!(source, found = words.len(), limit = args.limit, "Ranked words");

        let label = source_label(source);
        match output_format {
            OutputFormat::Json => {
                let output = TopOutput {
                    source: label,
                    limit: args.limit,
                    words,
                };
                println!("{}", to_json_line(&output)?);
            }
            OutputFormat::Text => {
                println!("--- {} ---", label);
                if words.is_empty() {
                    println!("  (no words)");
                }
                for (rank, entry) in words.iter().enumerate() {
                    println!("  {:>3}. {:<20} {}", rank + 1, entry.word, entry.count);
                }
                println!();
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
