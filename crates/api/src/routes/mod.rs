pub mod demands;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /                                   info banner
/// /demands                            list, create
/// /demands/bulk-delete                bulk delete (POST)
/// /demands/{id}                       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::info::api_info))
        .nest("/demands", demands::router())
}
