//! Standalone mock PACER server.
//!
//! Serves the stub authentication and case-search endpoints on
//! `MOCK_PACER_PORT` (default `4201`) for manual exercising of the SDK
//! without touching the real services.

use mock_pacer::{MockPacer, AUTH_PATH, FIND_PATH};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("MOCK_PACER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(4201);

    let mock = MockPacer::new();
    let app = mock_pacer::router(mock);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(%port, auth = AUTH_PATH, find = FIND_PATH, "mock PACER listening");

    axum::serve(listener, app).await?;
    Ok(())
}
