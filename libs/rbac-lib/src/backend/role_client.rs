use async_trait::async_trait;
use reqwest::Client;

use crate::backend::config::BackendConfig;
use crate::backend::errors::BackendApiError;
use crate::backend::http::{build_client, decode, expect_success, with_bearer};
use crate::backend::models::{CreateRoleRequest, SetRolePermissionsRequest, UpdateRoleRequest};
use crate::backend::traits::RoleApi;
use crate::entities::{Permission, Role};
use crate::session::SessionContext;

#[derive(Debug, Clone)]
pub struct RoleClient {
    config: BackendConfig,
    http: Client,
}

impl RoleClient {
    pub fn new(config: BackendConfig) -> Self {
        let http = build_client(config.timeout);
        Self { config, http }
    }
}

#[async_trait]
impl RoleApi for RoleClient {
    async fn list_roles(&self, session: &SessionContext) -> Result<Vec<Role>, BackendApiError> {
        let response = with_bearer(self.http.get(self.config.roles_url()), session.token())
            .send()
            .await?;
        decode(response).await
    }

    async fn create_role(
        &self,
        session: &SessionContext,
        request: &CreateRoleRequest,
    ) -> Result<Role, BackendApiError> {
        let response = with_bearer(self.http.post(self.config.roles_url()), session.token())
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_role(
        &self,
        session: &SessionContext,
        role_id: &str,
        request: &UpdateRoleRequest,
    ) -> Result<Role, BackendApiError> {
        let url = self.config.role_url(role_id);
        let response = with_bearer(self.http.patch(url), session.token())
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn set_role_permissions(
        &self,
        session: &SessionContext,
        role_id: &str,
        request: &SetRolePermissionsRequest,
    ) -> Result<Role, BackendApiError> {
        let url = self.config.role_permissions_url(role_id);
        let response = with_bearer(self.http.patch(url), session.token())
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_role(
        &self,
        session: &SessionContext,
        role_id: &str,
    ) -> Result<(), BackendApiError> {
        let url = self.config.role_url(role_id);
        let response = with_bearer(self.http.delete(url), session.token())
            .send()
            .await?;
        expect_success(response).await
    }

    async fn list_permissions(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<Permission>, BackendApiError> {
        let url = self.config.permissions_url();
        let response = with_bearer(self.http.get(url), session.token())
            .send()
            .await?;
        decode(response).await
    }
}
