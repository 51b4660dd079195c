use anyhow::Context;
use bookmark_app::{logging, router, AppConfig, AppState};
use clap::Parser;
use engine_logging::{engine_info, engine_warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    logging::initialize(config.log_level, config.log_file.as_deref());

    let state = AppState::from_config(&config)?;
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    engine_info!("listening on http://{} ({:?} mode)", config.bind, config.mode);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    engine_info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        engine_warn!("failed to listen for ctrl-c: {err}");
    }
}
