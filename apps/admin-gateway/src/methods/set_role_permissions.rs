use axum::http::HeaderMap;
use axum::Json;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{RoleResponse, SetRolePermissionsBody};
use crate::methods::routes::ROLE_PERMISSIONS_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    patch,
    path = ROLE_PERMISSIONS_PATH,
    tag = "roles",
    params(
        ("id" = String, Path, description = "Role ID")
    ),
    request_body = SetRolePermissionsBody,
    responses(
        (status = 200, description = "Permission set replaced", body = RoleResponse),
        (status = 404, description = "Role not found"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn set_role_permissions(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SetRolePermissionsBody>,
) -> Result<Json<RoleResponse>, ApiError> {
    let session = session_from_headers(&headers);
    state
        .service
        .set_role_permissions(&session, &id, payload.permission_ids)
        .await
        .map(|role| Json(RoleResponse::from(role)))
        .map_err(|e| handle_service_error(e, &state.env, "set_role_permissions"))
}
