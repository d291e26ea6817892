use ytthumb_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; stdout stays free for results.
    match logging::init_logging() {
        Ok(path) => tracing::info!("ytthumb logging initialized at {}", path.display()),
        Err(err) => {
            logging::init_logging_stderr();
            tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
        }
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("ytthumb error: {:#}", err);
        std::process::exit(1);
    }
}
