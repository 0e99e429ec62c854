//! publish-feed - publish, update or delete a Bluesky feed generator record.
//!
//! A thin front end over `feedpub-xrpc`: arguments are validated up front,
//! then a single create, update or delete runs against the PDS.

mod cli;
mod commands;
mod error;
mod output;
mod validate;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use feedpub_xrpc::XrpcPds;

use cli::Cli;
use error::{CommandError, EXIT_FAILURE, EXIT_USAGE};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let mode = match validate::validate(&cli) {
        Ok(mode) => mode,
        Err(err) => {
            output::report(&err.to_string(), &err.tips());
            return ExitCode::from(EXIT_USAGE);
        }
    };
    debug!(pds = %cli.pds, ?mode, "Arguments validated");

    let result = match XrpcPds::new(cli.pds.clone()) {
        Ok(pds) => commands::run(&pds, mode).await,
        Err(err) => Err(CommandError::Client(err)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::report(&err.to_string(), &err.tips());
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // stdout carries the result lines only
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
