use serde::{Deserialize, Serialize};

use crate::entities::User;

/// Auth response. Different backend builds send the token under
/// `accessToken` or `access_token`; both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(alias = "accessToken")]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, alias = "expiresIn")]
    pub expires_in: Option<u64>,
    /// Profile snapshot, when the backend includes one with the token.
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial role update; absent fields are left untouched server-side.
#[derive(Debug, Default, Serialize)]
pub struct UpdateRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Full-replace payload for `PATCH /roles/{id}/permissions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRolePermissionsRequest {
    pub permission_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetUserActiveRequest {
    pub is_active: bool,
}

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub manager_count: u64,
    pub employee_count: u64,
}

/// Structured error body the backend attaches to non-2xx responses.
/// Different endpoints use `message` or `error`; both are read.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorPayload {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_accepts_both_field_spellings() {
        let camel: TokenResponse =
            serde_json::from_str(r#"{"accessToken": "t1"}"#).unwrap();
        assert_eq!(camel.access_token, "t1");

        let snake: TokenResponse =
            serde_json::from_str(r#"{"access_token": "t2", "expires_in": 3600}"#).unwrap();
        assert_eq!(snake.access_token, "t2");
        assert_eq!(snake.expires_in, Some(3600));
    }

    #[test]
    fn set_role_permissions_serializes_camel_case() {
        let body = SetRolePermissionsRequest {
            permission_ids: vec!["p1".to_string(), "p2".to_string()],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["permissionIds"], serde_json::json!(["p1", "p2"]));
    }

    #[test]
    fn error_payload_prefers_message_over_error() {
        let payload: ErrorPayload =
            serde_json::from_str(r#"{"message": "nope", "error": "bad"}"#).unwrap();
        assert_eq!(payload.into_message().as_deref(), Some("nope"));

        let fallback: ErrorPayload = serde_json::from_str(r#"{"error": "bad"}"#).unwrap();
        assert_eq!(fallback.into_message().as_deref(), Some("bad"));
    }
}
