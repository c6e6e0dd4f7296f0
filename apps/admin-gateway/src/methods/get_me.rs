use axum::http::HeaderMap;
use axum::Json;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::UserResponse;
use crate::methods::routes::USERS_ME_PATH;
use crate::state::{session_from_headers, AppState};

#[utoipa::path(
    get,
    path = USERS_ME_PATH,
    tag = "users",
    responses(
        (status = 200, description = "Profile of the caller", body = UserResponse),
        (status = 401, description = "Not authorized"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn get_me(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let session = session_from_headers(&headers);
    state
        .service
        .current_user(&session)
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "get_me"))
}
