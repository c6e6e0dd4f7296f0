use std::sync::Arc;

use crate::backend::models::{
    AdminStats, CreateRoleRequest, CreateUserRequest, SetRolePermissionsRequest,
    SetUserActiveRequest, SignupRequest, UpdateRoleRequest, UpdateUserRequest,
};
use crate::backend::traits::{AuthApi, RoleApi, UserApi};
use crate::backend::{AuthClient, RoleClient, UserClient};
use crate::entities::{Permission, Role, User};
use crate::errors_service::AdminError;
use crate::session::SessionContext;

const MAX_ROLE_NAME_LENGTH: usize = 255;

fn validate_role_name(name: &str) -> Result<(), AdminError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AdminError::Validation(
            "role name cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_ROLE_NAME_LENGTH {
        return Err(AdminError::Validation(format!(
            "role name cannot exceed {MAX_ROLE_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_credentials(email: &str, password: &str) -> Result<(), AdminError> {
    if email.trim().is_empty() {
        return Err(AdminError::Validation("email cannot be empty".to_string()));
    }
    if password.is_empty() {
        return Err(AdminError::Validation(
            "password cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Administration operations against the remote backend. Every call takes
/// the session context explicitly; its bearer token (when present) is
/// forwarded on the wire. Failures are surfaced once, immediately, with no
/// retries, and never mutate the session.
#[derive(Debug, Clone)]
pub struct AdminService<R = RoleClient, U = UserClient, A = AuthClient>
where
    R: RoleApi,
    U: UserApi,
    A: AuthApi,
{
    pub role_api: Arc<R>,
    pub user_api: Arc<U>,
    pub auth_api: Arc<A>,
}

impl AdminService<RoleClient, UserClient, AuthClient> {
    pub fn new(role_api: RoleClient, user_api: UserClient, auth_api: AuthClient) -> Self {
        Self {
            role_api: Arc::new(role_api),
            user_api: Arc::new(user_api),
            auth_api: Arc::new(auth_api),
        }
    }
}

impl<R, U, A> AdminService<R, U, A>
where
    R: RoleApi,
    U: UserApi,
    A: AuthApi,
{
    pub fn with_apis(role_api: Arc<R>, user_api: Arc<U>, auth_api: Arc<A>) -> Self {
        Self {
            role_api,
            user_api,
            auth_api,
        }
    }

    // ---- roles & permissions ----

    pub async fn list_roles(&self, session: &SessionContext) -> Result<Vec<Role>, AdminError> {
        self.role_api
            .list_roles(session)
            .await
            .map_err(AdminError::from)
    }

    pub async fn list_permissions(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<Permission>, AdminError> {
        self.role_api
            .list_permissions(session)
            .await
            .map_err(AdminError::from)
    }

    /// Create a role. The name is validated before any network call.
    pub async fn create_role(
        &self,
        session: &SessionContext,
        name: &str,
        description: Option<&str>,
    ) -> Result<Role, AdminError> {
        validate_role_name(name)?;
        let request = CreateRoleRequest {
            name: name.trim().to_string(),
            description: description.map(str::to_string),
        };
        self.role_api
            .create_role(session, &request)
            .await
            .map_err(AdminError::from)
    }

    /// Partial update; a `NotFound` from the backend is passed through.
    pub async fn update_role(
        &self,
        session: &SessionContext,
        role_id: &str,
        update: UpdateRoleRequest,
    ) -> Result<Role, AdminError> {
        if let Some(name) = update.name.as_deref() {
            validate_role_name(name)?;
        }
        self.role_api
            .update_role(session, role_id, &update)
            .await
            .map_err(AdminError::from)
    }

    /// Full replace: after this call the role holds exactly
    /// `permission_ids`, with anything previously assigned but omitted here
    /// removed. An empty list clears the role.
    pub async fn set_role_permissions(
        &self,
        session: &SessionContext,
        role_id: &str,
        permission_ids: Vec<String>,
    ) -> Result<Role, AdminError> {
        let request = SetRolePermissionsRequest { permission_ids };
        self.role_api
            .set_role_permissions(session, role_id, &request)
            .await
            .map_err(AdminError::from)
    }

    pub async fn delete_role(
        &self,
        session: &SessionContext,
        role_id: &str,
    ) -> Result<(), AdminError> {
        self.role_api
            .delete_role(session, role_id)
            .await
            .map_err(AdminError::from)
    }

    // ---- users ----

    pub async fn list_users(&self, session: &SessionContext) -> Result<Vec<User>, AdminError> {
        self.user_api
            .list_users(session)
            .await
            .map_err(AdminError::from)
    }

    pub async fn create_user(
        &self,
        session: &SessionContext,
        request: CreateUserRequest,
    ) -> Result<User, AdminError> {
        if request.email.trim().is_empty() {
            return Err(AdminError::Validation("email cannot be empty".to_string()));
        }
        self.user_api
            .create_user(session, &request)
            .await
            .map_err(AdminError::from)
    }

    pub async fn get_user(
        &self,
        session: &SessionContext,
        user_id: &str,
    ) -> Result<Option<User>, AdminError> {
        self.user_api
            .get_user(session, user_id)
            .await
            .map_err(AdminError::from)
    }

    pub async fn update_user(
        &self,
        session: &SessionContext,
        user_id: &str,
        update: UpdateUserRequest,
    ) -> Result<User, AdminError> {
        self.user_api
            .update_user(session, user_id, &update)
            .await
            .map_err(AdminError::from)
    }

    pub async fn delete_user(
        &self,
        session: &SessionContext,
        user_id: &str,
    ) -> Result<(), AdminError> {
        self.user_api
            .delete_user(session, user_id)
            .await
            .map_err(AdminError::from)
    }

    pub async fn set_user_active(
        &self,
        session: &SessionContext,
        user_id: &str,
        is_active: bool,
    ) -> Result<User, AdminError> {
        let request = SetUserActiveRequest { is_active };
        self.user_api
            .set_user_active(session, user_id, &request)
            .await
            .map_err(AdminError::from)
    }

    // ---- employee profiles ----
    // Same records as /users, served under the backend's /employees/{id}
    // family for the profile screens.

    pub async fn get_employee(
        &self,
        session: &SessionContext,
        employee_id: &str,
    ) -> Result<Option<User>, AdminError> {
        self.user_api
            .get_employee(session, employee_id)
            .await
            .map_err(AdminError::from)
    }

    pub async fn update_employee(
        &self,
        session: &SessionContext,
        employee_id: &str,
        update: UpdateUserRequest,
    ) -> Result<User, AdminError> {
        self.user_api
            .update_employee(session, employee_id, &update)
            .await
            .map_err(AdminError::from)
    }

    pub async fn delete_employee(
        &self,
        session: &SessionContext,
        employee_id: &str,
    ) -> Result<(), AdminError> {
        self.user_api
            .delete_employee(session, employee_id)
            .await
            .map_err(AdminError::from)
    }

    pub async fn current_user(&self, session: &SessionContext) -> Result<User, AdminError> {
        self.user_api
            .current_user(session)
            .await
            .map_err(AdminError::from)
    }

    pub async fn admin_stats(&self, session: &SessionContext) -> Result<AdminStats, AdminError> {
        self.user_api
            .admin_stats(session)
            .await
            .map_err(AdminError::from)
    }

    // ---- auth ----

    /// Authenticate and populate the session: the token is stored, then the
    /// profile snapshot (from the token response when the backend includes
    /// one, fetched from `/users/me` otherwise). On failure the session is
    /// left exactly as it was.
    pub async fn login(
        &self,
        session: &mut SessionContext,
        email: &str,
        password: &str,
    ) -> Result<User, AdminError> {
        validate_credentials(email, password)?;

        let token_response = self.auth_api.login(email, password).await?;

        let authed = SessionContext::with_token(token_response.access_token.clone());
        let user = match token_response.user {
            Some(user) => user,
            None => self.user_api.current_user(&authed).await?,
        };

        session.set_token(token_response.access_token);
        session.set_current_user(user.clone());
        tracing::info!(user_id = %user.id, "login succeeded");
        Ok(user)
    }

    pub async fn signup(
        &self,
        session: &mut SessionContext,
        request: SignupRequest,
    ) -> Result<User, AdminError> {
        validate_credentials(&request.email, &request.password)?;

        let token_response = self.auth_api.signup(&request).await?;

        let authed = SessionContext::with_token(token_response.access_token.clone());
        let user = match token_response.user {
            Some(user) => user,
            None => self.user_api.current_user(&authed).await?,
        };

        session.set_token(token_response.access_token);
        session.set_current_user(user.clone());
        Ok(user)
    }

    pub fn logout(&self, session: &mut SessionContext) {
        session.clear();
    }
}
