//! Development server: serves a freshly generated `data.json` and the built
//! frontend.

mod config;
mod mock;

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.addr;
    tracing::info!(
        "Serving {} with {} points per chart",
        config.static_dir.display(),
        config.points
    );

    let app = Router::new()
        .route("/data.json", get(data_json))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn data_json(State(config): State<ServerConfig>) -> impl IntoResponse {
    let charts = mock::generate_charts(config.points);
    ([(header::CACHE_CONTROL, "no-store")], Json(charts))
}
