use std::sync::Arc;

use trivia_core::service::TriviaService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Query façade over the configured question and category stores.
    pub service: TriviaService,
    pub config: Arc<ServerConfig>,
}
