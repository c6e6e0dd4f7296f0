use axum::http::HeaderMap;
use axum::Json;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::PermissionResponse;
use crate::methods::routes::PERMISSIONS_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    get,
    path = PERMISSIONS_PATH,
    tag = "roles",
    responses(
        (status = 200, description = "Permission catalog", body = Vec<PermissionResponse>),
        (status = 401, description = "Not authorized"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn get_permissions(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<PermissionResponse>>, ApiError> {
    let session = session_from_headers(&headers);
    state
        .service
        .list_permissions(&session)
        .await
        .map(|permissions| {
            Json(
                permissions
                    .into_iter()
                    .map(PermissionResponse::from)
                    .collect(),
            )
        })
        .map_err(|e| handle_service_error(e, &state.env, "get_permissions"))
}
