use axum::http::StatusCode;
use axum::Json;
use rbac_lib::backend::models::SignupRequest;
use rbac_lib::session::SessionContext;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{AuthResponse, SignupBody, UserResponse};
use crate::methods::routes::AUTH_SIGNUP_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = AUTH_SIGNUP_PATH,
    tag = "auth",
    request_body = SignupBody,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing credentials"),
        (status = 502, description = "Backend unreachable"),
    )
)]
pub async fn signup(
    axum::extract::State(state): axum::extract::State<AppState>,
    Json(payload): Json<SignupBody>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let mut session = SessionContext::anonymous();
    let request = SignupRequest {
        email: payload.email,
        password: payload.password,
        first_name: payload.first_name,
        last_name: payload.last_name,
        role: payload.role,
    };
    let user = state
        .service
        .signup(&mut session, request)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "signup"))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token: session.token().unwrap_or_default().to_string(),
            user: UserResponse::from(user),
        }),
    ))
}
