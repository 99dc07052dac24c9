//! Customer service entry point.
//!
//! # Responsibility
//! - Wire config, logging, storage and HTTP routes at process start.
//! - Exit non-zero with a logged reason when any startup step fails.

use customer_api::{AppConfig, HttpServer};
use customer_core::init_logging;
use log::error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            // Logging is not configured yet.
            eprintln!("failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.logging.level, config.logging.dir.as_deref()) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let server = match HttpServer::from_config(config) {
        Ok(server) => server,
        Err(err) => {
            error!("event=server_start module=server status=error error_code=db_open_failed error={err}");
            return ExitCode::FAILURE;
        }
    };

    match server.start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_start module=server status=error error_code=listen_failed error={err}");
            ExitCode::FAILURE
        }
    }
}
