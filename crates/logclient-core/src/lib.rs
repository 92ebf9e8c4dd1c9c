pub mod error;
pub mod formatter;
pub mod logging;
pub mod models;
pub mod sender;

pub use error::{ClientError, Result};
pub use formatter::{format_entry, Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use logging::config::LoggingConfig;
pub use logging::formatter::LogFormat;
pub use logging::{init, init_from_args};
pub use models::{FormatTemplate, LogEntry, LogLevel};
pub use sender::{connect, parse_port, ConnectOptions, LogSender};
