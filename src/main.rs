//! Command-line entry point for the Hours Calculator.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use hours_calculator::calculator::HoursCalculator;
use hours_calculator::config::ConfigLoader;
use hours_calculator::error::HoursError;
use hours_calculator::report::ReportFormat;

/// Works out whether enough hours were worked, from timesheet workbooks
/// and configured leave and public holidays.
#[derive(Debug, Parser)]
#[command(name = "hours-calculator", version, about)]
struct Cli {
    /// Settings file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(short, long, default_value = "appSettings.json")]
    config: PathBuf,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit straight after printing instead of waiting for Enter.
    #[arg(long)]
    no_wait: bool,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain text, one total per line.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Run failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), HoursError> {
    let settings = ConfigLoader::load(&cli.config)?.into_settings();
    let report = HoursCalculator::new(&settings)?.run()?;

    report.write_to(&mut io::stdout().lock(), cli.format.into())?;
    if !cli.no_wait {
        wait_for_enter().map_err(|e| HoursError::ReportOutput {
            message: e.to_string(),
        })?;
    }
    Ok(())
}

fn wait_for_enter() -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out)?;
    write!(out, "Hit enter to continue...")?;
    out.flush()?;
    drop(out);

    io::stdin().lock().read_line(&mut String::new())?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
