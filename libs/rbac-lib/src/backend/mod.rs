pub mod auth_client;
pub mod config;
pub mod errors;
mod http;
pub mod models;
pub mod role_client;
pub mod traits;
pub mod user_client;

pub use auth_client::AuthClient;
pub use config::BackendConfig;
pub use errors::BackendApiError;
pub use role_client::RoleClient;
pub use user_client::UserClient;
