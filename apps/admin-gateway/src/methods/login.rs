use axum::Json;
use rbac_lib::session::SessionContext;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{AuthResponse, LoginBody, UserResponse};
use crate::methods::routes::AUTH_LOGIN_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = AUTH_LOGIN_PATH,
    tag = "auth",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Authenticated", body = AuthResponse),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn login(
    axum::extract::State(state): axum::extract::State<AppState>,
    Json(payload): Json<LoginBody>,
) -> Result<Json<AuthResponse>, ApiError> {
    let mut session = SessionContext::anonymous();
    let user = state
        .service
        .login(&mut session, &payload.email, &payload.password)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "login"))?;

    Ok(Json(AuthResponse {
        access_token: session.token().unwrap_or_default().to_string(),
        user: UserResponse::from(user),
    }))
}
