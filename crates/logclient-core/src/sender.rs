use crate::error::{ClientError, Result};
use crate::models::{FormatTemplate, LogEntry};
use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing::{debug, trace};

/// Socket options applied when opening the connection
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    /// Upper bound per resolved address (None = OS default)
    pub connect_timeout: Option<Duration>,
    pub nodelay: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            nodelay: true,
        }
    }
}

/// Parses a port argument, rejecting zero and anything outside u16
pub fn parse_port(value: &str) -> Result<u16> {
    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ClientError::InvalidPort(value.to_string())),
    }
}

/// Opens the single stream used for the whole session
pub fn connect(host: &str, port: u16, options: &ConnectOptions) -> Result<TcpStream> {
    let addr = format!("{}:{}", host, port);

    let stream = match options.connect_timeout {
        Some(timeout) => connect_with_timeout(host, port, timeout),
        None => TcpStream::connect((host, port)),
    }
    .map_err(|source| ClientError::Connect {
        addr: addr.clone(),
        source,
    })?;

    stream.set_nodelay(options.nodelay)?;
    debug!(addr = %addr, nodelay = options.nodelay, "Connected to logging service");

    Ok(stream)
}

fn connect_with_timeout(host: &str, port: u16, timeout: Duration) -> io::Result<TcpStream> {
    let mut last_err = None;
    for addr in (host, port).to_socket_addrs()? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(err) => {
                debug!(addr = %addr, error = %err, "Connection attempt failed");
                last_err = Some(err);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            "host did not resolve to any address",
        )
    }))
}

/// Writes newline-terminated entries to the logging service
///
/// Every line is flushed before `send` returns.
pub struct LogSender<W: Write> {
    writer: W,
    sent: usize,
}

impl<W: Write> LogSender<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, sent: 0 }
    }

    /// Writes one line followed by `\n`, then flushes
    pub fn send(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        self.sent += 1;
        trace!(line = %line, sent = self.sent, "Sent log line");
        Ok(())
    }

    /// Formats the entry and sends it
    pub fn send_entry(
        &mut self,
        entry: &LogEntry,
        template: &FormatTemplate,
        now: NaiveDateTime,
    ) -> Result<()> {
        let line = entry.render(template, now);
        self.send(&line)
    }

    /// Number of lines delivered so far
    pub fn sent(&self) -> usize {
        self.sent
    }

    /// Flushes and releases the underlying stream
    pub fn close(mut self) -> Result<()> {
        self.writer.flush()?;
        debug!(sent = self.sent, "Closing log stream");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_must_be_positive_integer() {
        assert_eq!(parse_port("5031").unwrap(), 5031);
        assert_eq!(parse_port(" 80 ").unwrap(), 80);
        for bad in ["0", "abc", "", "65536", "-1"] {
            assert!(
                matches!(parse_port(bad), Err(ClientError::InvalidPort(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn send_appends_newline_and_counts() {
        let mut wire = Vec::new();
        let mut sender = LogSender::new(&mut wire);
        sender.send("first").unwrap();
        sender.send("").unwrap();
        assert_eq!(sender.sent(), 2);
        sender.close().unwrap();
        assert_eq!(wire, b"first\n\n".to_vec());
    }
}
