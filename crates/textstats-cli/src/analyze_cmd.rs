use std::process::ExitCode;

use serde::Serialize;
use serde_json::{Map, Value};
use textstats_core::{StatValue, Statistic, analyze};
use tracing::debug;

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{
    input_sources, parse_statistics, read_input, select_entries, source_label, to_json_line,
};

#[derive(Debug, Serialize)]
struct AnalysisOutput<'a> {
    source: &'a str,
    report: Map<String, Value>,
}

pub fn run_analyze(args: AnalyzeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let stats = parse_statistics(&args.stats)?;

    for source in input_sources(&args.files) {
        let text = read_input(source)?;
        let report = analyze(&text);
        debug!(source, bytes = text.len(), "Analyzed input");

        let entries = select_entries(&report, &stats);
        let label = source_label(source);

        match output_format {
            OutputFormat::Json => {
                let output = AnalysisOutput {
                    source: label,
                    report: entries_to_map(&entries)?,
                };
                println!("{}", to_json_line(&output)?);
            }
            OutputFormat::Text => print_entries(label, &entries),
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn entries_to_map(entries: &[(Statistic, StatValue)]) -> CliResult<Map<String, Value>> {
    let mut map = Map::with_capacity(entries.len());
    for (stat, value) in entries {
        let value = serde_json::to_value(value)
            .map_err(|e| CliError::runtime(format!("Failed to serialize {}: {}", stat, e)))?;
        map.insert(stat.name().to_string(), value);
    }
    Ok(map)
}

fn print_entries(label: &str, entries: &[(Statistic, StatValue)]) {
    println!("--- {} ---", label);
    for (stat, value) in entries {
        println!("  {:<22} {}", format!("{stat}:"), value);
    }
    println!();
}
