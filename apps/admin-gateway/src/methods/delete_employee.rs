use axum::http::{HeaderMap, StatusCode};

use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::EMPLOYEES_BY_ID_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    delete,
    path = EMPLOYEES_BY_ID_PATH,
    tag = "employees",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted successfully"),
        (status = 404, description = "Employee not found"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn delete_employee(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let session = session_from_headers(&headers);
    state
        .service
        .delete_employee(&session, &id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_employee"))
}
