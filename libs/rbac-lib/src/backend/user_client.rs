use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::backend::config::BackendConfig;
use crate::backend::errors::BackendApiError;
use crate::backend::http::{build_client, decode, expect_success, with_bearer};
use crate::backend::models::{
    AdminStats, CreateUserRequest, SetUserActiveRequest, UpdateUserRequest,
};
use crate::backend::traits::UserApi;
use crate::entities::User;
use crate::session::SessionContext;

#[derive(Debug, Clone)]
pub struct UserClient {
    config: BackendConfig,
    http: Client,
}

impl UserClient {
    pub fn new(config: BackendConfig) -> Self {
        let http = build_client(config.timeout);
        Self { config, http }
    }
}

#[async_trait]
impl UserApi for UserClient {
    async fn list_users(&self, session: &SessionContext) -> Result<Vec<User>, BackendApiError> {
        let response = with_bearer(self.http.get(self.config.users_url()), session.token())
            .send()
            .await?;
        decode(response).await
    }

    async fn create_user(
        &self,
        session: &SessionContext,
        request: &CreateUserRequest,
    ) -> Result<User, BackendApiError> {
        let response = with_bearer(self.http.post(self.config.users_url()), session.token())
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn get_user(
        &self,
        session: &SessionContext,
        user_id: &str,
    ) -> Result<Option<User>, BackendApiError> {
        let url = self.config.user_url(user_id);
        let response = with_bearer(self.http.get(url), session.token())
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    async fn update_user(
        &self,
        session: &SessionContext,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<User, BackendApiError> {
        let url = self.config.user_url(user_id);
        let response = with_bearer(self.http.patch(url), session.token())
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_user(
        &self,
        session: &SessionContext,
        user_id: &str,
    ) -> Result<(), BackendApiError> {
        let url = self.config.user_url(user_id);
        let response = with_bearer(self.http.delete(url), session.token())
            .send()
            .await?;
        expect_success(response).await
    }

    async fn set_user_active(
        &self,
        session: &SessionContext,
        user_id: &str,
        request: &SetUserActiveRequest,
    ) -> Result<User, BackendApiError> {
        let url = self.config.user_active_url(user_id);
        let response = with_bearer(self.http.patch(url), session.token())
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn get_employee(
        &self,
        session: &SessionContext,
        employee_id: &str,
    ) -> Result<Option<User>, BackendApiError> {
        let url = self.config.employee_url(employee_id);
        let response = with_bearer(self.http.get(url), session.token())
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    async fn update_employee(
        &self,
        session: &SessionContext,
        employee_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<User, BackendApiError> {
        let url = self.config.employee_url(employee_id);
        let response = with_bearer(self.http.patch(url), session.token())
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_employee(
        &self,
        session: &SessionContext,
        employee_id: &str,
    ) -> Result<(), BackendApiError> {
        let url = self.config.employee_url(employee_id);
        let response = with_bearer(self.http.delete(url), session.token())
            .send()
            .await?;
        expect_success(response).await
    }

    async fn current_user(&self, session: &SessionContext) -> Result<User, BackendApiError> {
        let response = with_bearer(self.http.get(self.config.me_url()), session.token())
            .send()
            .await?;
        decode(response).await
    }

    async fn admin_stats(
        &self,
        session: &SessionContext,
    ) -> Result<AdminStats, BackendApiError> {
        let url = self.config.admin_stats_url();
        let response = with_bearer(self.http.get(url), session.token())
            .send()
            .await?;
        decode(response).await
    }
}
