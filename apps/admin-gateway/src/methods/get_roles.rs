use axum::http::HeaderMap;
use axum::Json;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::RoleResponse;
use crate::methods::routes::ROLES_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    get,
    path = ROLES_PATH,
    tag = "roles",
    responses(
        (status = 200, description = "List of roles", body = Vec<RoleResponse>),
        (status = 401, description = "Not authorized"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn get_roles(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<RoleResponse>>, ApiError> {
    let session = session_from_headers(&headers);
    state
        .service
        .list_roles(&session)
        .await
        .map(|roles| Json(roles.into_iter().map(RoleResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "get_roles"))
}
