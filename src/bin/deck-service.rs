use anyhow::Result;
use deck_service::config::Config;
use deck_service::http;
use deck_service::service::DeckService;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let svc = match config.shuffle_seed {
        Some(seed) => {
            tracing::warn!(seed, "using a fixed shuffle seed");
            DeckService::with_seed(seed)
        }
        None => DeckService::new(),
    };
    let app = http::router(Arc::new(svc));

    tracing::info!(addr = %config.addr, version = deck_service::VERSION, "starting server");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("received shutdown signal");
}
