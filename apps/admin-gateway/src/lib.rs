pub mod config;
pub mod constants;
pub mod error;
pub mod methods;
pub mod shutdown;
pub mod state;

use axum::routing::{get, patch, post};
use axum::Router;
use utoipa::OpenApi;

use crate::methods::create_role::{__path_create_role, create_role};
use crate::methods::create_user::{__path_create_user, create_user};
use crate::methods::delete_employee::{__path_delete_employee, delete_employee};
use crate::methods::delete_role::{__path_delete_role, delete_role};
use crate::methods::delete_user::{__path_delete_user, delete_user};
use crate::methods::entities::{
    AdminStatsResponse, AuthResponse, CreateRoleBody, CreateUserBody, LoginBody,
    PermissionResponse, RoleResponse, SetRolePermissionsBody, SetUserActiveBody, SignupBody,
    UpdateRoleBody, UpdateUserBody, UserResponse,
};
use crate::methods::get_admin_stats::{__path_get_admin_stats, get_admin_stats};
use crate::methods::get_employee::{__path_get_employee, get_employee};
use crate::methods::get_me::{__path_get_me, get_me};
use crate::methods::get_permissions::{__path_get_permissions, get_permissions};
use crate::methods::get_roles::{__path_get_roles, get_roles};
use crate::methods::get_user_by_id::{__path_get_user_by_id, get_user_by_id};
use crate::methods::get_users::{__path_get_users, get_users};
use crate::methods::health_check::health_check;
use crate::methods::login::{__path_login, login};
use crate::methods::routes::{
    ADMIN_STATS_PATH, API_PREFIX, AUTH_LOGIN_PATH, AUTH_SIGNUP_PATH, EMPLOYEES_BY_ID_PATH,
    PERMISSIONS_PATH, ROLES_BY_ID_PATH, ROLES_PATH, ROLE_PERMISSIONS_PATH, SERVICE_HEALTH_PATH,
    USERS_BY_ID_PATH, USERS_ME_PATH, USERS_PATH, USER_ACTIVE_PATH,
};
use crate::methods::set_role_permissions::{__path_set_role_permissions, set_role_permissions};
use crate::methods::set_user_active::{__path_set_user_active, set_user_active};
use crate::methods::signup::{__path_signup, signup};
use crate::methods::update_employee::{__path_update_employee, update_employee};
use crate::methods::update_role::{__path_update_role, update_role};
use crate::methods::update_user::{__path_update_user, update_user};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        get_users, create_user, get_me, get_user_by_id, update_user, delete_user,
        set_user_active,
        get_employee, update_employee, delete_employee,
        get_roles, create_role, update_role, delete_role, set_role_permissions,
        get_permissions,
        login, signup, get_admin_stats
    ),
    components(schemas(
        UserResponse, CreateUserBody, UpdateUserBody, SetUserActiveBody,
        RoleResponse, CreateRoleBody, UpdateRoleBody, SetRolePermissionsBody,
        PermissionResponse,
        LoginBody, SignupBody, AuthResponse, AdminStatsResponse
    )),
    tags(
        (name = "users", description = "User administration endpoints"),
        (name = "employees", description = "Employee profile endpoints"),
        (name = "roles", description = "Role and permission administration endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "admin", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Proxy routes nested under `/api`, plus the root-level health check.
/// Middleware layers are applied by the binary, not here, so tests can
/// exercise the bare router.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(USERS_PATH, get(get_users).post(create_user))
        .route(USERS_ME_PATH, get(get_me))
        .route(
            USERS_BY_ID_PATH,
            get(get_user_by_id).patch(update_user).delete(delete_user),
        )
        .route(USER_ACTIVE_PATH, patch(set_user_active))
        .route(
            EMPLOYEES_BY_ID_PATH,
            get(get_employee)
                .patch(update_employee)
                .delete(delete_employee),
        )
        .route(ROLES_PATH, get(get_roles).post(create_role))
        .route(ROLES_BY_ID_PATH, patch(update_role).delete(delete_role))
        .route(ROLE_PERMISSIONS_PATH, patch(set_role_permissions))
        .route(PERMISSIONS_PATH, get(get_permissions))
        .route(AUTH_LOGIN_PATH, post(login))
        .route(AUTH_SIGNUP_PATH, post(signup))
        .route(ADMIN_STATS_PATH, get(get_admin_stats));

    Router::new()
        .nest(API_PREFIX, api_routes)
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .with_state(state)
}
