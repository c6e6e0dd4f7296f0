use async_trait::async_trait;

use crate::backend::errors::BackendApiError;
use crate::backend::models::{
    AdminStats, CreateRoleRequest, CreateUserRequest, SetRolePermissionsRequest,
    SetUserActiveRequest, SignupRequest, TokenResponse, UpdateRoleRequest, UpdateUserRequest,
};
use crate::entities::{Permission, Role, User};
use crate::session::SessionContext;

/// Role and permission endpoints. The session's bearer token (when present)
/// is forwarded on the wire; an anonymous session sends the request
/// unauthenticated and lets the backend decide.
#[async_trait]
pub trait RoleApi: Send + Sync {
    async fn list_roles(&self, session: &SessionContext) -> Result<Vec<Role>, BackendApiError>;
    async fn create_role(
        &self,
        session: &SessionContext,
        request: &CreateRoleRequest,
    ) -> Result<Role, BackendApiError>;
    async fn update_role(
        &self,
        session: &SessionContext,
        role_id: &str,
        request: &UpdateRoleRequest,
    ) -> Result<Role, BackendApiError>;
    async fn set_role_permissions(
        &self,
        session: &SessionContext,
        role_id: &str,
        request: &SetRolePermissionsRequest,
    ) -> Result<Role, BackendApiError>;
    async fn delete_role(
        &self,
        session: &SessionContext,
        role_id: &str,
    ) -> Result<(), BackendApiError>;
    async fn list_permissions(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<Permission>, BackendApiError>;
}

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list_users(&self, session: &SessionContext) -> Result<Vec<User>, BackendApiError>;
    async fn create_user(
        &self,
        session: &SessionContext,
        request: &CreateUserRequest,
    ) -> Result<User, BackendApiError>;
    async fn get_user(
        &self,
        session: &SessionContext,
        user_id: &str,
    ) -> Result<Option<User>, BackendApiError>;
    async fn update_user(
        &self,
        session: &SessionContext,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<User, BackendApiError>;
    async fn delete_user(
        &self,
        session: &SessionContext,
        user_id: &str,
    ) -> Result<(), BackendApiError>;
    async fn set_user_active(
        &self,
        session: &SessionContext,
        user_id: &str,
        request: &SetUserActiveRequest,
    ) -> Result<User, BackendApiError>;
    async fn get_employee(
        &self,
        session: &SessionContext,
        employee_id: &str,
    ) -> Result<Option<User>, BackendApiError>;
    async fn update_employee(
        &self,
        session: &SessionContext,
        employee_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<User, BackendApiError>;
    async fn delete_employee(
        &self,
        session: &SessionContext,
        employee_id: &str,
    ) -> Result<(), BackendApiError>;
    async fn current_user(&self, session: &SessionContext) -> Result<User, BackendApiError>;
    async fn admin_stats(&self, session: &SessionContext)
        -> Result<AdminStats, BackendApiError>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, BackendApiError>;
    async fn signup(&self, request: &SignupRequest) -> Result<TokenResponse, BackendApiError>;
}
