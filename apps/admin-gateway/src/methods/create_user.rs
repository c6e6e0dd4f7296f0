use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use rbac_lib::backend::models::CreateUserRequest;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{CreateUserBody, UserResponse};
use crate::methods::routes::USERS_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    post,
    path = USERS_PATH,
    tag = "users",
    request_body = CreateUserBody,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authorized"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn create_user(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserBody>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let session = session_from_headers(&headers);
    let request = CreateUserRequest {
        email: payload.email,
        first_name: payload.first_name,
        last_name: payload.last_name,
        role: payload.role,
        password: payload.password,
    };
    state
        .service
        .create_user(&session, request)
        .await
        .map(|user| (StatusCode::CREATED, Json(UserResponse::from(user))))
        .map_err(|e| handle_service_error(e, &state.env, "create_user"))
}
