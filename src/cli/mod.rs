use clap::Parser;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "preflight",
    about = "A pre-deployment readiness auditor for containerized web applications",
    version,
    author,
    long_about = None
)]
pub struct PreflightCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Exit non-zero if any check reports FAIL
    #[arg(long)]
    pub strict: bool,
}
