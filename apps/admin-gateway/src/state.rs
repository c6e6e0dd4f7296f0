use std::sync::Arc;

use axum::http::HeaderMap;
use rbac_lib::admin_service::AdminService;
use rbac_lib::backend::traits::{AuthApi, RoleApi, UserApi};
use rbac_lib::backend::{AuthClient, RoleClient, UserClient};
use rbac_lib::session::SessionContext;

#[derive(Clone)]
pub struct AppState<R = RoleClient, U = UserClient, A = AuthClient>
where
    R: RoleApi + Send + Sync + 'static,
    U: UserApi + Send + Sync + 'static,
    A: AuthApi + Send + Sync + 'static,
{
    pub service: Arc<AdminService<R, U, A>>,
    pub env: String,
}

/// Rebuild a per-request session from the incoming Authorization header.
/// No header means an anonymous session; the request is still forwarded and
/// the backend decides.
pub fn session_from_headers(headers: &HeaderMap) -> SessionContext {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(SessionContext::with_token)
        .unwrap_or_else(SessionContext::anonymous)
}
