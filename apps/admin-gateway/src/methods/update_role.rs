use axum::http::HeaderMap;
use axum::Json;
use rbac_lib::backend::models::UpdateRoleRequest;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{RoleResponse, UpdateRoleBody};
use crate::methods::routes::ROLES_BY_ID_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    patch,
    path = ROLES_BY_ID_PATH,
    tag = "roles",
    params(
        ("id" = String, Path, description = "Role ID")
    ),
    request_body = UpdateRoleBody,
    responses(
        (status = 200, description = "Role updated successfully", body = RoleResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Role not found"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn update_role(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateRoleBody>,
) -> Result<Json<RoleResponse>, ApiError> {
    let session = session_from_headers(&headers);
    let update = UpdateRoleRequest {
        name: payload.name,
        description: payload.description,
    };
    state
        .service
        .update_role(&session, &id, update)
        .await
        .map(|role| Json(RoleResponse::from(role)))
        .map_err(|e| handle_service_error(e, &state.env, "update_role"))
}
