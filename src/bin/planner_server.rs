//! `planner-server`: serve order plans over HTTP.
//!
//! Reads settings from `config/planner.toml` (or the path in
//! `PLANNER_CONFIG`) and `PLANNER__*` environment variables, loads the
//! exchange snapshots once and serves until Ctrl-C.

use anyhow::Context;
use crypto_order_planner::api::rest::{AppState, bind, create_router};
use crypto_order_planner::infrastructure::config::Settings;
use crypto_order_planner::infrastructure::logging;
use crypto_order_planner::infrastructure::persistence::FileExchangeRepository;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os("PLANNER_CONFIG").map(PathBuf::from);
    let settings = Settings::load(config_path.as_deref()).context("loading configuration")?;
    logging::init(&settings.logging).context("initialising logging")?;

    let repository = FileExchangeRepository::open(&settings.data.directory).with_context(|| {
        format!(
            "loading exchanges from {}",
            settings.data.directory.display()
        )
    })?;
    info!(
        exchanges = repository.len(),
        directory = %repository.directory().display(),
        "exchange data loaded"
    );

    let router = create_router(AppState::new(Arc::new(repository)));

    let address = settings.server.address();
    let listener = bind(&address).await?;
    info!(%address, "planner server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if signal::ctrl_c().await.is_ok() {
                info!("shutdown signal received");
            }
        })
        .await
        .context("serving")?;

    info!("planner server stopped");
    Ok(())
}
