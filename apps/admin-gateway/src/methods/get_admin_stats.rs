use axum::http::HeaderMap;
use axum::Json;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::AdminStatsResponse;
use crate::methods::routes::ADMIN_STATS_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    get,
    path = ADMIN_STATS_PATH,
    tag = "admin",
    responses(
        (status = 200, description = "Headcount per role", body = AdminStatsResponse),
        (status = 401, description = "Not authorized"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn get_admin_stats(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AdminStatsResponse>, ApiError> {
    let session = session_from_headers(&headers);
    state
        .service
        .admin_stats(&session)
        .await
        .map(|stats| Json(AdminStatsResponse::from(stats)))
        .map_err(|e| handle_service_error(e, &state.env, "get_admin_stats"))
}
