pub mod commands;
pub mod config;
pub mod console;
pub mod session;

use clap::{CommandFactory, Parser};
use logclient_core::LogFormat;
use std::path::PathBuf;

/// Interactive client that sends formatted log entries to a logging service
#[derive(Parser, Debug)]
#[command(name = "logservice-client", version, about, long_about = None)]
pub struct Cli {
    /// Host name or IP address of the logging service
    pub host: String,

    /// TCP port of the logging service
    pub port: String,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Diagnostics level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Append diagnostics to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Diagnostics format (text or json)
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// Shorthand for --log-level debug
    #[arg(short, long)]
    pub verbose: bool,
}

/// One-line usage string printed on argument errors
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
