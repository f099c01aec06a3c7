use clap::{CommandFactory, Parser};
use pdf_analyzer::{analyze, formatting};
use std::io::{self, Write};
use std::process::ExitCode;

/// Takes no arguments: the PDF is read from stdin, so anything on the command
/// line (including --help) is rejected.
#[derive(Parser)]
#[command(
    about = "Summarizes a discretized probability density function",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {}

const INPUT_HELP: &str = "\
Data should be provided via standard input, e.g. `cat data.txt | pdf-analyzer`.
First column must be the coordinate, and the second the probability density.
The density does not need to be normalized.";

fn main() -> ExitCode {
    if Args::try_parse().is_err() {
        eprintln!("error: no arguments allowed");
        eprintln!("{}", Args::command().render_usage());
        eprintln!("{}", INPUT_HELP);
        return ExitCode::FAILURE;
    }

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let report = match analyze(io::stdin().lock()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Render fully before writing so a failure never leaves partial tables.
    let rendered = formatting::render_report(&report);
    if let Err(e) = io::stdout().lock().write_all(rendered.as_bytes()) {
        eprintln!("error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
