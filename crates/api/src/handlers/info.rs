use axum::Json;

use crate::response::MessageResponse;

/// GET /api
///
/// Liveness banner for clients probing the API root.
pub async fn api_info() -> Json<MessageResponse> {
    Json(MessageResponse::new("Weekly Demand Management API"))
}
