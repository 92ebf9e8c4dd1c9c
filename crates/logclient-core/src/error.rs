use std::io;
use thiserror::Error;

/// Errors raised while building and delivering log entries
#[derive(Debug, Error)]
pub enum ClientError {
    /// Token matched neither a level name nor a level ordinal
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),
    /// Port argument is not an integer in 1..=65535
    #[error("invalid port {0:?}: expected an integer between 1 and 65535")]
    InvalidPort(String),
    /// The connection to the logging service could not be opened
    #[error("failed to connect to {addr}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
