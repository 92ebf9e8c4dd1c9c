pub mod config;
pub mod file_writer;
pub mod formatter;

use anyhow::{Context, Result};
use config::LoggingConfig;
use formatter::LogFormat;
use std::path::PathBuf;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Initialize the diagnostics subsystem with the given configuration
///
/// A valid `RUST_LOG` takes precedence over `config.level`. Console output goes to
/// stderr; stdout belongs to the interactive menu.
pub fn init(config: LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level: {}", config.level))?,
    };

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if config.console {
        layers.push(console_layer(config.format));
    }
    if let Some(log_file) = &config.file {
        layers.push(file_layer(log_file.clone(), config.format));
    }

    Registry::default()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("Logging has already been initialized")?;

    Ok(())
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    match format {
        LogFormat::Text => layer.with_ansi(true).boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

fn file_layer(path: PathBuf, format: LogFormat) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(file_writer::FileWriter::new(path))
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .with_timer(fmt::time::ChronoUtc::rfc_3339());

    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Initialize logging from command-line arguments, already layered over the
/// configuration file
pub fn init_from_args(
    log_level: Option<String>,
    log_file: Option<PathBuf>,
    log_format: Option<LogFormat>,
    verbose: bool,
) -> Result<()> {
    init(LoggingConfig::from_args(log_level, log_file, log_format, verbose)?)
}
