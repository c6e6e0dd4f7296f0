// Proxy routes (nested under /api)
pub const USERS_PATH: &str = "/users";
pub const USERS_ME_PATH: &str = "/users/me";
pub const USERS_BY_ID_PATH: &str = "/users/{id}";
pub const USER_ACTIVE_PATH: &str = "/users/{id}/active";
pub const EMPLOYEES_BY_ID_PATH: &str = "/employees/{id}";
pub const ROLES_PATH: &str = "/roles";
pub const ROLES_BY_ID_PATH: &str = "/roles/{id}";
pub const ROLE_PERMISSIONS_PATH: &str = "/roles/{id}/permissions";
pub const PERMISSIONS_PATH: &str = "/permissions";
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_SIGNUP_PATH: &str = "/auth/signup";
pub const ADMIN_STATS_PATH: &str = "/admin/stats";

// Root-level service routes (not proxied)
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_DOCS_PATH: &str = "/docs";

// Proxy prefix
pub const API_PREFIX: &str = "/api";
