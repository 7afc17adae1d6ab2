use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use medglean::{config, extract, extract_and_render, read_report_file, ReportError};

/// Recover structured fields from a malformed report dump and print a
/// readable summary.
#[derive(Parser)]
#[command(name = config::APP_NAME, version, about)]
struct Cli {
    /// Input file; `-` or omitted reads stdin.
    input: Option<PathBuf>,

    /// Print the raw extraction record as JSON instead of the text report.
    #[arg(long)]
    record_json: bool,

    /// Write the output to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();

    let raw = match read_input(cli.input.as_deref()) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(error = %e, "Could not read input");
            return ExitCode::FAILURE;
        }
    };

    let output = if cli.record_json {
        let record = extract(&raw);
        match serde_json::to_string_pretty(&record) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Could not serialize extraction record");
                return ExitCode::FAILURE;
            }
        }
    } else {
        extract_and_render(&raw)
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, format!("{output}\n")) {
                tracing::error!(path = %path.display(), error = %e, "Could not write output");
                return ExitCode::FAILURE;
            }
        }
        None => println!("{output}"),
    }

    ExitCode::SUCCESS
}

fn read_input(path: Option<&Path>) -> Result<String, ReportError> {
    match path {
        Some(p) if p != Path::new("-") => read_report_file(p),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| ReportError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}
