use crate::backend::errors::BackendApiError;

/// Service-level error taxonomy surfaced to callers of the administration
/// operations. The normalizer and evaluator never produce these; they
/// degrade to empty/false instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AdminError {
    /// Client-side pre-flight failure; no network call was made.
    #[error("validation error: {0}")]
    Validation(String),

    /// 401/403 from the backend. The session is left untouched.
    #[error("not authorized: {0}")]
    Auth(String),

    /// 404 from the backend; the entity is already gone.
    #[error("resource not found")]
    NotFound,

    /// Any other non-2xx with the backend's structured message payload.
    #[error("backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<BackendApiError> for AdminError {
    fn from(err: BackendApiError) -> Self {
        match err {
            BackendApiError::Unauthorized { status: _, message } => AdminError::Auth(message),
            BackendApiError::NotFound => AdminError::NotFound,
            BackendApiError::Status { status, message } => {
                AdminError::Backend { status, message }
            }
            BackendApiError::InvalidResponse(msg) => {
                AdminError::Transport(format!("invalid response: {msg}"))
            }
            BackendApiError::Http(e) => AdminError::Transport(e.to_string()),
        }
    }
}
