use crate::config::Config;
use crate::console::Console;
use crate::session::{Session, Termination};
use anyhow::{Context, Result};
use logclient_core::{connect, parse_port, LogSender, SystemClock};
use std::io;
use tracing::info;

/// Connects to the logging service and runs the interactive session on the
/// process terminal
pub fn execute_connect(host: &str, port: &str, config: &Config) -> Result<Termination> {
    // Validate before touching the network
    let port = parse_port(port)?;

    info!(host = %host, port, "Connecting to logging service");
    let stream = connect(host, port, &config.connect_options())?;

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let session = Session::new(console, LogSender::new(stream), SystemClock);

    let termination = session
        .run()
        .with_context(|| format!("Session with {}:{} failed", host, port))?;

    info!(termination = ?termination, "Session ended");
    Ok(termination)
}
