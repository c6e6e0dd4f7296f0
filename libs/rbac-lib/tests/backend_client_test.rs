//! Exercises the reqwest clients against an in-process stub backend: bearer
//! forwarding, per-status error mapping and the full-replace permission
//! endpoint.

use std::time::Duration;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use rbac_lib::backend::models::{CreateRoleRequest, SetRolePermissionsRequest};
use rbac_lib::backend::traits::{AuthApi, RoleApi};
use rbac_lib::backend::{AuthClient, BackendApiError, BackendConfig, RoleClient};
use rbac_lib::session::SessionContext;

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

async fn stub_list_roles(headers: HeaderMap) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match bearer(&headers).as_deref() {
        Some("good-token") => Ok(Json(json!([
            {"id": "r1", "name": "ADMIN", "permissions": [{"id": "p1", "name": "MANAGE_ROLES"}]}
        ]))),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "missing or invalid token"})),
        )),
    }
}

async fn stub_create_role(
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    if body["name"] == "TAKEN" {
        return Err((
            StatusCode::CONFLICT,
            Json(json!({"message": "role name already exists"})),
        ));
    }
    Ok((
        StatusCode::CREATED,
        Json(json!({"id": "r2", "name": body["name"], "permissions": []})),
    ))
}

async fn stub_set_permissions(
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if id == "missing" {
        return Err((StatusCode::NOT_FOUND, Json(json!({"message": "no such role"}))));
    }
    // Full replace: echo back exactly what was sent.
    let permissions: Vec<Value> = body["permissionIds"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .map(|pid| json!({"id": pid, "name": format!("PERM_{}", pid.as_str().unwrap_or(""))}))
        .collect();
    Ok(Json(json!({"id": id, "name": "ADMIN", "permissions": permissions})))
}

async fn start_stub_backend() -> String {
    let app = Router::new()
        .route("/roles", get(stub_list_roles).post(stub_create_role))
        .route("/roles/{id}/permissions", patch(stub_set_permissions))
        .route(
            "/permissions",
            get(|| async {
                Json(json!([
                    {"id": "p1", "name": "MANAGE_ROLES"},
                    {"name": "VIEW_REPORTS"}
                ]))
            }),
        )
        .route(
            "/auth/login",
            post(|| async { Json(json!({"accessToken": "tok-camel"})) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend");
    });
    format!("http://{addr}")
}

fn client_for(base_url: &str) -> RoleClient {
    RoleClient::new(BackendConfig::new(base_url, Duration::from_secs(5)))
}

#[tokio::test]
async fn list_roles_forwards_bearer_token() {
    let base_url = start_stub_backend().await;
    let client = client_for(&base_url);

    let session = SessionContext::with_token("good-token");
    let roles = client.list_roles(&session).await.unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "ADMIN");
    assert_eq!(roles[0].permissions[0].name, "MANAGE_ROLES");
}

#[tokio::test]
async fn anonymous_request_gets_unauthorized_with_payload() {
    let base_url = start_stub_backend().await;
    let client = client_for(&base_url);

    let session = SessionContext::anonymous();
    let err = client.list_roles(&session).await.unwrap_err();
    match err {
        BackendApiError::Unauthorized { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "missing or invalid token");
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn create_role_conflict_surfaces_backend_message() {
    let base_url = start_stub_backend().await;
    let client = client_for(&base_url);

    let session = SessionContext::with_token("good-token");
    let request = CreateRoleRequest {
        name: "TAKEN".to_string(),
        description: None,
    };
    let err = client.create_role(&session, &request).await.unwrap_err();
    match err {
        BackendApiError::Status { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "role name already exists");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn set_role_permissions_round_trips_full_replace() {
    let base_url = start_stub_backend().await;
    let client = client_for(&base_url);

    let session = SessionContext::with_token("good-token");
    let request = SetRolePermissionsRequest {
        permission_ids: vec!["p1".to_string(), "p2".to_string()],
    };
    let updated = client
        .set_role_permissions(&session, "r1", &request)
        .await
        .unwrap();
    let ids: Vec<_> = updated
        .permissions
        .iter()
        .map(|p| p.id.clone().unwrap())
        .collect();
    assert_eq!(ids, ["p1", "p2"]);
}

#[tokio::test]
async fn set_role_permissions_missing_role_maps_to_not_found() {
    let base_url = start_stub_backend().await;
    let client = client_for(&base_url);

    let session = SessionContext::with_token("good-token");
    let request = SetRolePermissionsRequest {
        permission_ids: vec![],
    };
    let err = client
        .set_role_permissions(&session, "missing", &request)
        .await
        .unwrap_err();
    assert!(matches!(err, BackendApiError::NotFound));
}

#[tokio::test]
async fn list_permissions_accepts_entries_without_ids() {
    let base_url = start_stub_backend().await;
    let client = client_for(&base_url);

    let session = SessionContext::with_token("good-token");
    let permissions = client.list_permissions(&session).await.unwrap();
    assert_eq!(permissions.len(), 2);
    assert_eq!(permissions[0].id.as_deref(), Some("p1"));
    assert_eq!(permissions[1].id, None);
    assert_eq!(permissions[1].name, "VIEW_REPORTS");
}

#[tokio::test]
async fn login_reads_camel_case_token_field() {
    let base_url = start_stub_backend().await;
    let client = AuthClient::new(BackendConfig::new(base_url.as_str(), Duration::from_secs(5)));

    let token = client.login("ann@example.com", "pw").await.unwrap();
    assert_eq!(token.access_token, "tok-camel");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Nothing listens on this port.
    let client = client_for("http://127.0.0.1:9");
    let session = SessionContext::anonymous();
    let err = client.list_roles(&session).await.unwrap_err();
    assert!(matches!(err, BackendApiError::Http(_)));
}
