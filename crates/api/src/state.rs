use std::sync::Arc;

use demandboard_db::DemandStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Demand persistence, opened in `main` and closed after shutdown.
    pub store: Arc<dyn DemandStore>,
}
