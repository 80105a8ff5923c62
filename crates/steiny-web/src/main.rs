use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;

use steiny_web::{build_object_store, build_router, telemetry, AppState, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Loads .env as well, so RUST_LOG from there applies to telemetry
    let settings = Settings::load()?;
    telemetry::init_telemetry();

    info!("Starting Steiny B's web server...");

    let store = build_object_store(&settings)?;

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    let state = AppState::new(settings, store)?;
    let app = build_router(state);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
