use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;

use cli::PreflightCli;

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = PreflightCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    let report = cli::commands::audit::execute()?;

    // Verdicts never alter the exit code unless strict mode asks for it
    if cli.strict && report.has_failures() {
        info!("Strict mode: failing checks present, exiting non-zero");
        std::process::exit(1);
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
