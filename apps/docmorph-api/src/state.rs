//! Application state for the docmorph API

use crate::engine::SofficeEngine;
use docmorph_core::ConvertEngine;
use std::sync::Arc;

/// Shared, read-only per-process state. Nothing here survives a request or
/// is mutated by one.
pub struct AppState {
    pub engine: Arc<dyn ConvertEngine + Send + Sync>,
}

impl AppState {
    pub fn new() -> Self {
        let binary =
            std::env::var("SOFFICE_PATH").unwrap_or_else(|_| "soffice".to_string());
        tracing::info!("Using LibreOffice conversion engine: {}", binary);

        Self {
            engine: Arc::new(SofficeEngine::new(binary)),
        }
    }

    #[cfg(test)]
    pub fn with_engine(engine: Arc<dyn ConvertEngine + Send + Sync>) -> Self {
        Self { engine }
    }
}
