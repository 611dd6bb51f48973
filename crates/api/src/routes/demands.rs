//! Route definitions for demands, mounted at `/api/demands`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::demands;
use crate::state::AppState;

/// ```text
/// GET    /                  -> list_demands
/// POST   /                  -> create_demand
/// POST   /bulk-delete       -> bulk_delete_demands
/// GET    /{id}              -> get_demand
/// PUT    /{id}              -> update_demand
/// DELETE /{id}              -> delete_demand
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(demands::list_demands).post(demands::create_demand))
        .route("/bulk-delete", post(demands::bulk_delete_demands))
        .route(
            "/{id}",
            get(demands::get_demand)
                .put(demands::update_demand)
                .delete(demands::delete_demand),
        )
}
