use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use logclient_cli::commands::connect::execute_connect;
use logclient_cli::config::Config;
use logclient_cli::session::Termination;
use logclient_cli::{usage, Cli};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                    ExitCode::SUCCESS
                }
                _ => {
                    println!("{}", usage());
                    ExitCode::FAILURE
                }
            };
        }
    };

    match run(cli) {
        // Noisy disconnects are not failures
        Ok(Termination::Graceful | Termination::Noisy) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Termination> {
    let config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };

    let logging = config
        .logging
        .overlay(cli.log_level, cli.log_file, cli.log_format);
    logclient_core::init_from_args(
        logging.level,
        logging.file.map(PathBuf::from),
        logging.format,
        cli.verbose,
    )?;

    execute_connect(&cli.host, &cli.port, &config)
}
