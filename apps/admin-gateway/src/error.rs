use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rbac_lib::errors_service::AdminError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    /// Non-2xx from the backend, passed through with its status and message.
    Upstream(u16, String),
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    pub fn role_not_found() -> Self {
        ApiError::NotFound("role not found".to_string())
    }

    pub fn user_not_found() -> Self {
        ApiError::NotFound("user not found".to_string())
    }

    pub fn employee_not_found() -> Self {
        ApiError::NotFound("employee not found".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", Some(msg)),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", Some(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg)),
            ApiError::Upstream(status, msg) => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, "backend_error", Some(msg))
            }
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "bad_gateway", Some(msg)),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", Some(msg))
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::Validation(msg) => ApiError::BadRequest(msg),
            AdminError::Auth(msg) => ApiError::Unauthorized(msg),
            AdminError::NotFound => ApiError::NotFound("resource not found".to_string()),
            AdminError::Backend { status, message } => ApiError::Upstream(status, message),
            AdminError::Transport(msg) => ApiError::BadGateway(msg),
            AdminError::Internal(err) => ApiError::Internal(err.to_string()),
            _ => ApiError::Internal("unexpected error".to_string()),
        }
    }
}

/// Check if environment is production-like (prod, prod01, prod02, etc.)
pub fn is_prod_like(env: &str) -> bool {
    env.to_lowercase().starts_with("prod")
}

/// Converts a service error to an ApiError, logging internal and transport
/// failures. In production, internal error details are hidden.
pub fn handle_service_error(err: AdminError, env: &str, operation: &str) -> ApiError {
    match &err {
        AdminError::Internal(_) | AdminError::Transport(_) => {
            tracing::error!(env = %env, error = ?err, operation = %operation, "service error");
            if is_prod_like(env) {
                ApiError::BadGateway("backend unavailable".to_string())
            } else {
                ApiError::from(err)
            }
        }
        _ => ApiError::from(err),
    }
}
