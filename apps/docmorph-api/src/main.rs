//! docmorph API server
//!
//! REST endpoints for document conversion and manipulation:
//! - PDF → Word and Word → PDF conversion
//! - whole-document page rotation
//! - page-range splitting

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod engine;
mod error;
mod handlers;
mod state;

use state::AppState;

fn app(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Conversion endpoints
        .route("/api/convert/pdf-to-word", post(handlers::pdf_to_word))
        .route("/api/convert/word-to-pdf", post(handlers::word_to_pdf))
        // Manipulation endpoints
        .route("/api/convert/rotate-pdf", post(handlers::rotate_pdf))
        .route("/api/convert/split", post(handlers::split))
        // Add middleware
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docmorph_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Initializing docmorph API...");
    let state = Arc::new(AppState::new());

    let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(50 * 1024 * 1024);

    let app = app(state, max_upload_bytes);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting docmorph API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
