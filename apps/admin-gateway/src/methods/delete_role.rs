use axum::http::{HeaderMap, StatusCode};

use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::ROLES_BY_ID_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    delete,
    path = ROLES_BY_ID_PATH,
    tag = "roles",
    params(
        ("id" = String, Path, description = "Role ID")
    ),
    responses(
        (status = 204, description = "Role deleted successfully"),
        (status = 404, description = "Role not found"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn delete_role(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let session = session_from_headers(&headers);
    state
        .service
        .delete_role(&session, &id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_role"))
}
