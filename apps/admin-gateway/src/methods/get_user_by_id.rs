use axum::http::HeaderMap;
use axum::Json;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::UserResponse;
use crate::methods::routes::USERS_BY_ID_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    get,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn get_user_by_id(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let session = session_from_headers(&headers);
    let user = state
        .service
        .get_user(&session, &id)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "get_user_by_id"))?;

    user.map(|u| Json(UserResponse::from(u)))
        .ok_or_else(ApiError::user_not_found)
}
