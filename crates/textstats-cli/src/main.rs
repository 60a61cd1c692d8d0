use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod analyze_cmd;
mod cli;
mod error;
mod sample_cmd;
mod shared;
mod top_cmd;

use analyze_cmd::run_analyze;
use cli::{Cli, Commands};
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};
use sample_cmd::run_sample;
use top_cmd::run_top;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(command = ?cli.command, "Parsed CLI args");

    match cli.command {
        Commands::Analyze(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output_format| run_analyze(args, output_format))
        }
        Commands::Top(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output_format| run_top(args, output_format))
        }
        Commands::Sample(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output_format| run_sample(args, output_format))
        }
    }
}

/// Resolve the output format, run the command and render any error.
fn dispatch(
    output_format: &str,
    run: impl FnOnce(OutputFormat) -> CliResult<ExitCode>,
) -> ExitCode {
    let fallback = output_format_hint(output_format);
    let output_format = match parse_output_format(output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run(output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
