//! Shared plumbing for the backend clients: client construction, bearer
//! injection and per-status response decoding.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::errors::BackendApiError;
use super::models::ErrorPayload;

pub(crate) fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to create HTTP client")
}

/// Attach `Authorization: Bearer <token>` when a token is present. Without
/// one the request goes out unauthenticated; the backend decides.
pub(crate) fn with_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn error_message(response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<ErrorPayload>(&body)
        .ok()
        .and_then(ErrorPayload::into_message)
        .unwrap_or(body)
}

/// Map a response onto the client error taxonomy and decode the body on
/// success.
pub(crate) async fn decode<T: DeserializeOwned>(
    response: Response,
) -> Result<T, BackendApiError> {
    let status = response.status();
    match status {
        s if s.is_success() => response
            .json::<T>()
            .await
            .map_err(|e| BackendApiError::InvalidResponse(e.to_string())),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(BackendApiError::Unauthorized {
                status: status.as_u16(),
                message: error_message(response).await,
            })
        }
        StatusCode::NOT_FOUND => Err(BackendApiError::NotFound),
        _ => Err(BackendApiError::Status {
            status: status.as_u16(),
            message: error_message(response).await,
        }),
    }
}

/// Like `decode` but for endpoints that answer with an empty body.
pub(crate) async fn expect_success(response: Response) -> Result<(), BackendApiError> {
    let status = response.status();
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(BackendApiError::Unauthorized {
                status: status.as_u16(),
                message: error_message(response).await,
            })
        }
        StatusCode::NOT_FOUND => Err(BackendApiError::NotFound),
        _ => Err(BackendApiError::Status {
            status: status.as_u16(),
            message: error_message(response).await,
        }),
    }
}
