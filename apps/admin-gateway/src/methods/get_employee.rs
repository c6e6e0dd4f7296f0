use axum::http::HeaderMap;
use axum::Json;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::UserResponse;
use crate::methods::routes::EMPLOYEES_BY_ID_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    get,
    path = EMPLOYEES_BY_ID_PATH,
    tag = "employees",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee profile", body = UserResponse),
        (status = 404, description = "Employee not found"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn get_employee(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let session = session_from_headers(&headers);
    let employee = state
        .service
        .get_employee(&session, &id)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "get_employee"))?;

    employee
        .map(|u| Json(UserResponse::from(u)))
        .ok_or_else(ApiError::employee_not_found)
}
