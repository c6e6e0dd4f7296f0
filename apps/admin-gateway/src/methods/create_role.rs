use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{CreateRoleBody, RoleResponse};
use crate::methods::routes::ROLES_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    post,
    path = ROLES_PATH,
    tag = "roles",
    request_body = CreateRoleBody,
    responses(
        (status = 201, description = "Role created successfully", body = RoleResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authorized"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn create_role(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoleBody>,
) -> Result<(StatusCode, Json<RoleResponse>), ApiError> {
    let session = session_from_headers(&headers);
    state
        .service
        .create_role(&session, &payload.name, payload.description.as_deref())
        .await
        .map(|role| (StatusCode::CREATED, Json(RoleResponse::from(role))))
        .map_err(|e| handle_service_error(e, &state.env, "create_role"))
}
