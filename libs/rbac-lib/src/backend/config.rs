use std::time::Duration;

const BACKEND_URL: &str = "BACKEND_URL";
const BACKEND_TIMEOUT_SECS: &str = "BACKEND_TIMEOUT_SECS";

const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BACKEND_URL).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let timeout_secs: u64 = std::env::var(BACKEND_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        BackendConfig { base_url, timeout }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn user_url(&self, user_id: &str) -> String {
        format!("{}/users/{}", self.base_url, user_id)
    }

    pub fn user_active_url(&self, user_id: &str) -> String {
        format!("{}/users/{}/active", self.base_url, user_id)
    }

    pub fn employee_url(&self, employee_id: &str) -> String {
        format!("{}/employees/{}", self.base_url, employee_id)
    }

    pub fn me_url(&self) -> String {
        format!("{}/users/me", self.base_url)
    }

    pub fn roles_url(&self) -> String {
        format!("{}/roles", self.base_url)
    }

    pub fn role_url(&self, role_id: &str) -> String {
        format!("{}/roles/{}", self.base_url, role_id)
    }

    pub fn role_permissions_url(&self, role_id: &str) -> String {
        format!("{}/roles/{}/permissions", self.base_url, role_id)
    }

    pub fn permissions_url(&self) -> String {
        format!("{}/permissions", self.base_url)
    }

    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    pub fn signup_url(&self) -> String {
        format!("{}/auth/signup", self.base_url)
    }

    pub fn admin_stats_url(&self) -> String {
        format!("{}/admin/stats", self.base_url)
    }
}
