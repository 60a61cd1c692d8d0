use std::process::ExitCode;

use serde::Serialize;
use textstats_core::{TextReport, analyze};

use crate::cli::SampleArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::to_json_line;

pub const SAMPLE_TEXT: &str = "
    The quick brown fox jumps over the lazy dog.
    This is a sample text for testing our analyzer.
    It contains multiple sentences! Does it work correctly?
    ";

#[derive(Debug, Serialize)]
struct SampleOutput {
    source: &'static str,
    report: TextReport,
}

pub fn run_sample(_args: SampleArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let report = analyze(SAMPLE_TEXT);

    match output_format {
        OutputFormat::Json => {
            let output = SampleOutput {
                source: "sample",
                report,
            };
            println!("{}", to_json_line(&output)?);
        }
        OutputFormat::Text => {
            println!("=== Text Analysis Results ===");
            for (stat, value) in report.entries() {
                println!("{}: {}", stat, value);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
