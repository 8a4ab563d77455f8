//! genewatch web server
//!
//! Run with: cargo run -p genewatch-web

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use genewatch_web::{config::Config, router::build_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting genewatch web server...");

    let config = Config::load()?;
    let addr = config.bind_addr()?;

    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
