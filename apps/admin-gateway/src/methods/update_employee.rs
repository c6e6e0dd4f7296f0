use axum::http::HeaderMap;
use axum::Json;
use rbac_lib::backend::models::UpdateUserRequest;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{UpdateUserBody, UserResponse};
use crate::methods::routes::EMPLOYEES_BY_ID_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    patch,
    path = EMPLOYEES_BY_ID_PATH,
    tag = "employees",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "Employee updated successfully", body = UserResponse),
        (status = 404, description = "Employee not found"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn update_employee(
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
        .update_employee(&session, &id, update)
        .await
        .map(|employee| Json(UserResponse::from(employee)))
        .map_err(|e| handle_service_error(e, &state.env, "update_employee"))
}
