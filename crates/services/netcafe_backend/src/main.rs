// File: services/netcafe_backend/src/main.rs
use netcafe_backend::{build_router, AppState};
use netcafe_common::{
    config_error, init, init_with_level, level_from_config, log_error, log_result, Context,
    NetcafeError,
};
use netcafe_config::load_config;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // config may have failed before logging was set up
            init();
            log_error(&err, "netcafe-backend stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), NetcafeError> {
    let config = Arc::new(load_config().map_err(config_error)?);
    init_with_level(level_from_config(config.log_level.as_deref()));

    let state = log_result(
        AppState::new(config.clone()).await,
        "Booking store and calendar mirror ready",
        "Failed to build application state",
    )?;
    let app = build_router(&state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")
}
