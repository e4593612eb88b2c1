mod api;
mod config;
mod dashboard;
mod error;
mod fixtures;
mod types;

use axum::{routing::get, Router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api::routes::{router, ApiState};
use crate::config::Config;
use crate::error::Result;

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    let api_state = ApiState {
        environment: cfg.environment.clone(),
    };

    // Dashboard page at the root, the static API underneath, and the 404
    // envelope from the api router as the shared fallback.
    let app = Router::new()
        .route("/", get(dashboard::render::page))
        .merge(router(api_state));

    let bind_addr = format!("0.0.0.0:{}", cfg.api_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(environment = %cfg.environment, "{} listening on {bind_addr}", config::SYSTEM_NAME);

    axum::serve(listener, app).await?;

    Ok(())
}
