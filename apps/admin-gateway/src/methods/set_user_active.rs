use axum::http::HeaderMap;
use axum::Json;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{SetUserActiveBody, UserResponse};
use crate::methods::routes::USER_ACTIVE_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    patch,
    path = USER_ACTIVE_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = SetUserActiveBody,
    responses(
        (status = 200, description = "Account status changed", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn set_user_active(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SetUserActiveBody>,
) -> Result<Json<UserResponse>, ApiError> {
    let session = session_from_headers(&headers);
    state
        .service
        .set_user_active(&session, &id, payload.is_active)
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "set_user_active"))
}
