use async_trait::async_trait;
use reqwest::Client;

use crate::backend::config::BackendConfig;
use crate::backend::errors::BackendApiError;
use crate::backend::http::{build_client, decode};
use crate::backend::models::{LoginRequest, SignupRequest, TokenResponse};
use crate::backend::traits::AuthApi;

#[derive(Debug, Clone)]
pub struct AuthClient {
    config: BackendConfig,
    http: Client,
}

impl AuthClient {
    pub fn new(config: BackendConfig) -> Self {
        let http = build_client(config.timeout);
        Self { config, http }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, BackendApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.config.login_url())
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<TokenResponse, BackendApiError> {
        let response = self
            .http
            .post(self.config.signup_url())
            .json(request)
            .send()
            .await?;
        decode(response).await
    }
}
