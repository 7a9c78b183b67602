mod actors;
mod analytics;
mod args;
mod benchmark;
mod client_factory;
mod error;
mod http;
mod logging;
mod runner;
#[cfg(test)]
mod test_client;

use crate::args::common::ThorArgs;
use crate::error::ThorError;
use crate::logging::{Logging, PRINT_TARGET};
use crate::runner::BenchmarkRunner;
use clap::error::ErrorKind;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match ThorArgs::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(error) => return print_usage(error),
    };

    // Dropped at the end of main, which flushes every pending line before the process exits.
    let mut logging = Logging::new();
    if let Err(error) = logging.init(args.debug.as_deref()) {
        eprintln!("Cannot initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    info!("Starting the benchmark...");
    match BenchmarkRunner::new(args).run().await {
        Ok(_) => {
            info!("Finished the benchmark.");
            ExitCode::SUCCESS
        }
        Err(failure) => {
            error!("Benchmark failed: {failure:?}");
            info!(
                target: PRINT_TARGET,
                "There was a problem: {}",
                failure.with_causes()
            );
            ExitCode::FAILURE
        }
    }
}

fn print_usage(error: ThorError) -> ExitCode {
    let ThorError::Usage(error) = error else {
        println!("{}", error.with_causes());
        return ExitCode::FAILURE;
    };

    print!("{}", ThorArgs::usage_message(&error));
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
