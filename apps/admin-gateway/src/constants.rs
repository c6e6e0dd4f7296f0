pub const SERVICE: &str = "admin-gateway";
pub const ENV: &str = "ENV";

pub const LOCAL_ENV: &str = "local";

pub const GATEWAY_PORT: &str = "GATEWAY_PORT";

// Middleware configuration
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const MAX_BODY_SIZE_BYTES: &str = "MAX_BODY_SIZE_BYTES";
pub const SHUTDOWN_TIMEOUT_SECS: &str = "SHUTDOWN_TIMEOUT_SECS";
