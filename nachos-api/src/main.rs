use std::net::SocketAddr;
use std::sync::Arc;

use nachos_api::{app, AppState};
use nachos_news::{NewsApiClient, DEFAULT_BASE_URL};
use nachos_services::NewsService;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,nachos_api=debug")),
        )
        .init();

    info!("Starting Los Nachos Chipies API");

    let base_url =
        std::env::var("NEWS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    info!("Proxying news requests to {}", base_url);

    let news_service = Arc::new(NewsService::new(NewsApiClient::new(base_url)));
    let state = AppState { news_service };

    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
