//! End-to-end tests for the gateway router: requests go through the real
//! handlers and HTTP clients against an in-process stub backend.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::Path;
use axum::http::{header, Request, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

use admin_gateway::build_router;
use admin_gateway::state::AppState;
use rbac_lib::admin_service::AdminService;
use rbac_lib::backend::config::BackendConfig;
use rbac_lib::backend::{AuthClient, RoleClient, UserClient};

// ==================== STUB BACKEND ====================

async fn stub_get_roles(headers: axum::http::HeaderMap) -> impl axum::response::IntoResponse {
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some("Bearer tok-1") => (
            StatusCode::OK,
            Json(json!([
                {
                    "id": "r1",
                    "name": "admin",
                    "permissions": [{ "id": "p1", "name": "MANAGE_ROLES" }]
                }
            ])),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "missing token" })),
        ),
    }
}

async fn stub_get_user(Path(id): Path<String>) -> impl axum::response::IntoResponse {
    if id == "u1" {
        (
            StatusCode::OK,
            Json(json!({
                "id": "u1",
                "email": "ann@example.com",
                "firstName": "Ann",
                "role": { "name": "manager", "permissions": [{ "name": "VIEW_REPORTS" }] },
                "permissions": ["EDIT_PROFILE"]
            })),
        )
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "message": "no such user" })))
    }
}

async fn stub_get_employee(Path(id): Path<String>) -> impl axum::response::IntoResponse {
    if id == "e1" {
        (
            StatusCode::OK,
            Json(json!({
                "id": "e1",
                "email": "bo@example.com",
                "firstName": "Bo",
                "role": "employee"
            })),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "no such employee" })),
        )
    }
}

async fn stub_login(Json(body): Json<Value>) -> impl axum::response::IntoResponse {
    if body["password"] == "secret" {
        (
            StatusCode::OK,
            Json(json!({
                "accessToken": "tok-login",
                "user": { "id": "u1", "email": "ann@example.com", "firstName": "Ann", "role": "employee" }
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "invalid credentials" })),
        )
    }
}

async fn stub_set_role_permissions(Json(body): Json<Value>) -> Json<Value> {
    let names: Vec<Value> = body["permissionIds"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .map(|id| json!({ "id": id, "name": format!("perm-{}", id.as_str().unwrap_or("?")) }))
        .collect();
    Json(json!({ "id": "r1", "name": "admin", "permissions": names }))
}

async fn start_stub_backend() -> String {
    let router = Router::new()
        .route("/roles", get(stub_get_roles))
        .route("/roles/{id}/permissions", patch(stub_set_role_permissions))
        .route("/users/{id}", get(stub_get_user))
        .route("/employees/{id}", get(stub_get_employee))
        .route("/auth/login", post(stub_login));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn gateway_for(base_url: &str) -> Router {
    let config = BackendConfig::new(base_url, std::time::Duration::from_secs(5));
    let service = AdminService::new(
        RoleClient::new(config.clone()),
        UserClient::new(config.clone()),
        AuthClient::new(config),
    );
    build_router(AppState {
        service: Arc::new(service),
        env: "test".to_string(),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ==================== TESTS ====================

#[tokio::test]
async fn health_check_is_public() {
    let app = gateway_for("http://127.0.0.1:9");

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_roles_forwards_bearer_token() {
    let base_url = start_stub_backend().await;
    let app = gateway_for(&base_url);

    let response = app
        .oneshot(
            Request::get("/api/roles")
                .header(header::AUTHORIZATION, "Bearer tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "admin");
    assert_eq!(body[0]["permissions"][0]["name"], "MANAGE_ROLES");
}

#[tokio::test]
async fn get_roles_without_token_is_401() {
    let base_url = start_stub_backend().await;
    let app = gateway_for(&base_url);

    let response = app
        .oneshot(Request::get("/api/roles").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn create_role_with_blank_name_is_rejected_before_the_backend() {
    // The stub has no POST /roles route; a forwarded request would 404.
    let base_url = start_stub_backend().await;
    let app = gateway_for(&base_url);

    let response = app
        .oneshot(
            Request::post("/api/roles")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "   "}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn set_role_permissions_replaces_the_full_set() {
    let base_url = start_stub_backend().await;
    let app = gateway_for(&base_url);

    let response = app
        .oneshot(
            Request::patch("/api/roles/r1/permissions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"permissionIds": ["p1", "p2"]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["permissions"].as_array().unwrap().len(), 2);
    assert_eq!(body["permissions"][1]["id"], "p2");
}

#[tokio::test]
async fn get_user_flattens_role_and_permissions() {
    let base_url = start_stub_backend().await;
    let app = gateway_for(&base_url);

    let response = app
        .oneshot(Request::get("/api/users/u1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["role"], "MANAGER");
    // Direct entries and role-object permissions are merged and sorted.
    assert_eq!(body["permissions"], json!(["EDIT_PROFILE", "VIEW_REPORTS"]));
}

#[tokio::test]
async fn employee_profile_is_proxied() {
    let base_url = start_stub_backend().await;
    let app = gateway_for(&base_url);

    let response = app
        .oneshot(
            Request::get("/api/employees/e1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], "bo@example.com");
    assert_eq!(body["role"], "EMPLOYEE");
}

#[tokio::test]
async fn missing_employee_returns_404() {
    let base_url = start_stub_backend().await;
    let app = gateway_for(&base_url);

    let response = app
        .oneshot(
            Request::get("/api/employees/e9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn missing_user_returns_404() {
    let base_url = start_stub_backend().await;
    let app = gateway_for(&base_url);

    let response = app
        .oneshot(Request::get("/api/users/u9").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn login_returns_token_and_flattened_profile() {
    let base_url = start_stub_backend().await;
    let app = gateway_for(&base_url);

    let response = app
        .oneshot(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"email": "ann@example.com", "password": "secret"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["accessToken"], "tok-login");
    assert_eq!(body["user"]["role"], "EMPLOYEE");
}

#[tokio::test]
async fn login_failure_is_401_not_500() {
    let base_url = start_stub_backend().await;
    let app = gateway_for(&base_url);

    let response = app
        .oneshot(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"email": "ann@example.com", "password": "wrong"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unreachable_backend_is_a_bad_gateway() {
    // Port 9 (discard) refuses connections.
    let app = gateway_for("http://127.0.0.1:9");

    let response = app
        .oneshot(Request::get("/api/roles").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
