//! Handlers for demand CRUD, filtering, and bulk deletion.
//!
//! Records are returned bare (no envelope). Create answers `201 Created`
//! with the stored record; update answers with the full merged record.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use demandboard_core::demand::{CreateDemand, UpdateDemand, DEMAND_ENTITY};
use demandboard_core::error::CoreError;
use demandboard_core::identifier::next_demand_id;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::DemandListParams;
use crate::response::{BulkDeleteResponse, MessageResponse};
use crate::state::AppState;

/// Request body for `POST /api/demands/bulk-delete`.
#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: DEMAND_ENTITY,
        id,
    })
}

/// POST /api/demands
///
/// Normalize the payload, assign the next `DMD-NNNN` identifier from the
/// live count, and insert. A concurrent create (or a create after a delete)
/// can compute an identifier that is already taken; the store rejects it
/// and the client gets `409 Conflict`.
pub async fn create_demand(
    State(state): State<AppState>,
    Json(input): Json<CreateDemand>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;

    let count = state.store.count().await?;
    let demand = input.into_demand(next_demand_id(count), Utc::now());
    state.store.insert(&demand).await?;

    tracing::info!(
        demand_id = %demand.id,
        priority = %demand.priority,
        category = %demand.category,
        "Demand created",
    );

    Ok((StatusCode::CREATED, Json(demand)))
}

/// GET /api/demands
///
/// List demands in insertion order, optionally filtered by `priority`,
/// `subgroup` and `category`.
pub async fn list_demands(
    State(state): State<AppState>,
    Query(params): Query<DemandListParams>,
) -> AppResult<impl IntoResponse> {
    let demands = state.store.list(&params.filter(), params.page()).await?;

    Ok(Json(demands))
}

/// GET /api/demands/{id}
pub async fn get_demand(
    State(state): State<AppState>,
    Path(demand_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let demand = state
        .store
        .find(&demand_id)
        .await?
        .ok_or_else(|| not_found(demand_id))?;

    Ok(Json(demand))
}

/// PUT /api/demands/{id}
///
/// Partial update: only fields sent with a non-null value change, and the
/// store applies them in one atomic merge. `updated_at` is refreshed even
/// when the body is `{}`.
pub async fn update_demand(
    State(state): State<AppState>,
    Path(demand_id): Path<String>,
    Json(input): Json<UpdateDemand>,
) -> AppResult<impl IntoResponse> {
    let changes = input.into_changes();

    let saved = state
        .store
        .update(&demand_id, &changes, Utc::now())
        .await?
        .ok_or_else(|| not_found(demand_id))?;

    tracing::info!(
        demand_id = %saved.id,
        changed = ?changes.changed_fields(),
        "Demand updated",
    );

    Ok(Json(saved))
}

/// DELETE /api/demands/{id}
pub async fn delete_demand(
    State(state): State<AppState>,
    Path(demand_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete(&demand_id).await? {
        return Err(not_found(demand_id));
    }

    tracing::info!(demand_id = %demand_id, "Demand deleted");

    Ok(Json(MessageResponse::new("Demand deleted successfully")))
}

/// POST /api/demands/bulk-delete
///
/// Best-effort removal of every listed id. Unknown ids are ignored and the
/// response reports how many demands were actually removed.
pub async fn bulk_delete_demands(
    State(state): State<AppState>,
    Json(input): Json<BulkDeleteRequest>,
) -> AppResult<impl IntoResponse> {
    let deleted_count = state.store.delete_many(&input.ids).await?;

    tracing::info!(
        requested = input.ids.len(),
        deleted_count,
        "Bulk demand delete",
    );

    Ok(Json(BulkDeleteResponse {
        message: format!("{deleted_count} demands deleted successfully"),
        deleted_count,
    }))
}
