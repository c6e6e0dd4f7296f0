use axum::http::HeaderMap;
use axum::Json;
use rbac_lib::backend::models::UpdateUserRequest;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{UpdateUserBody, UserResponse};
use crate::methods::routes::USERS_BY_ID_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    patch,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn update_user(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserBody>,
) -> Result<Json<UserResponse>, ApiError> {
    let session = session_from_headers(&headers);
    let update = UpdateUserRequest {
        email: payload.email,
        first_name: payload.first_name,
        last_name: payload.last_name,
        role: payload.role,
    };
    state
        .service
        .update_user(&session, &id, update)
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "update_user"))
}
