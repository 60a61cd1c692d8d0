use std::fs;
use std::io::{self, Read};

use serde::Serialize;
use textstats_core::{StatValue, Statistic, TextReport};

use crate::error::{CliError, CliResult};

pub const STDIN_SOURCE: &str = "-";

/// Input sources to process; no files means stdin.
pub fn input_sources(files: &[String]) -> Vec<&str> {
    if files.is_empty() {
        vec![STDIN_SOURCE]
    } else {
        files.iter().map(String::as_str).collect()
    }
}

/// Display label for an input source.
pub fn source_label(source: &str) -> &str {
    if source == STDIN_SOURCE {
        "<stdin>"
    } else {
        source
    }
}

pub fn read_input(source: &str) -> CliResult<String> {
    if source == STDIN_SOURCE {
        let mut text = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut text)
            .map_err(|e| CliError::runtime(format!("Failed to read stdin: {}", e)))?;
        Ok(text)
    } else {
        fs::read_to_string(source)
            .map_err(|e| CliError::runtime(format!("Failed to read file '{}': {}", source, e)))
    }
}

/// Resolve `--stat` names; none selects every statistic.
pub fn parse_statistics(names: &[String]) -> CliResult<Vec<Statistic>> {
    if names.is_empty() {
        return Ok(Statistic::ALL.to_vec());
    }

    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        let stat: Statistic = name.parse()?;
        if !selected.contains(&stat) {
            selected.push(stat);
        }
    }
    // Report order, regardless of flag order.
    selected.sort_by_key(|stat| Statistic::ALL.iter().position(|s| s == stat));
    Ok(selected)
}

/// The selected entries of a report.
pub fn select_entries(report: &TextReport, stats: &[Statistic]) -> Vec<(Statistic, StatValue)> {
    stats.iter().map(|&stat| (stat, report.get(stat))).collect()
}

pub fn to_json_line<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string(value)
        .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))
}
