use std::fmt;

/// Errors produced by the HTTP clients talking to the remote backend.
#[derive(Debug)]
pub enum BackendApiError {
    /// 401 or 403; the backend rejected the credentials.
    Unauthorized { status: u16, message: String },
    /// 404; the entity does not exist server-side.
    NotFound,
    /// Any other non-2xx status, with the backend's message payload when it
    /// sent one, else the raw body.
    Status { status: u16, message: String },
    /// The response body did not parse as the expected shape.
    InvalidResponse(String),
    /// The request failed before a response arrived.
    Http(reqwest::Error),
}

impl fmt::Display for BackendApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendApiError::Unauthorized { status, message } => {
                write!(f, "unauthorized ({status}): {message}")
            }
            BackendApiError::NotFound => write!(f, "not found"),
            BackendApiError::Status { status, message } => {
                write!(f, "backend returned {status}: {message}")
            }
            BackendApiError::InvalidResponse(msg) => {
                write!(f, "invalid response from backend: {msg}")
            }
            BackendApiError::Http(e) => write!(f, "request failed: {e}"),
        }
    }
}

impl std::error::Error for BackendApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendApiError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BackendApiError {
    fn from(err: reqwest::Error) -> Self {
        BackendApiError::Http(err)
    }
}
