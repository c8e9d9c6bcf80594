use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;

mod charts;
mod config;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod source;

#[cfg(test)]
mod tests;

fn main() {
    logging::init_logging();

    // 1️⃣ Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the record source
    let source = match source::from_config(&config.source) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("❌ Record source initialization failed: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState { source };

    // 3️⃣ Start the server
    tracing::info!(
        addr = %config.bind_addr,
        workers = config.max_workers,
        "Starting server at http://{}",
        config.bind_addr
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, sharing the state across workers
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
