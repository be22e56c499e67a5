//! depscope CLI
//!
//! Loads the analysis configuration and prints the normalized fields.

use clap::Parser;
use depscope::{
    AppError,
    config::{DEFAULT_CONFIG_PATH, load_config},
    output::{OutputFormat, render},
};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// depscope - validate a dependency analysis configuration
#[derive(Parser, Debug)]
#[command(name = "depscope")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "DEPSCOPE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DEPSCOPE_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum LogFormat {
    /// Human-readable output
    Pretty,
    /// JSON structured output
    Json,
}

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);
    let ansi = std::io::stderr().is_terminal();

    match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_ansi(ansi).with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_ansi(ansi).with_writer(std::io::stderr))
            .init(),
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %args.config,
        "Loading analysis configuration"
    );

    let config = load_config(Some(&args.config))
        .inspect_err(|e| debug!(error = %e, "Failed to load configuration"))?;

    println!("{}", render(&config, args.format)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level, args.log_format);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(AppError::Config(e)) => eprintln!("Configuration error: {}", e),
                _ => eprintln!("Unexpected error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
