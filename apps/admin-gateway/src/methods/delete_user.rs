use axum::http::{HeaderMap, StatusCode};

use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USERS_BY_ID_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    delete,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 404, description = "User not found"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn delete_user(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let session = session_from_headers(&headers);
    state
        .service
        .delete_user(&session, &id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_user"))
}
