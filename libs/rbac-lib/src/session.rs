//! Session context: the bearer token and profile snapshot of the currently
//! authenticated user. Threaded explicitly into every operation that needs
//! it; nothing here reads ambient global state.

use secrecy::{ExposeSecret, SecretString};

use crate::entities::User;

#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Option<SecretString>,
    user: Option<User>,
}

impl SessionContext {
    /// An anonymous session: no token, no user. Requests made under it go
    /// out without an Authorization header.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session carrying only a bearer token, e.g. rebuilt from an
    /// incoming Authorization header before the profile is known.
    pub fn with_token(token: impl Into<String>) -> Self {
        SessionContext {
            token: Some(SecretString::new(token.into())),
            user: None,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_current_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(SecretString::new(token.into()));
    }

    /// The raw bearer token, if one is held. Exposed as `&str` only at the
    /// point a request is built.
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret().as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Logout: drop the token and the profile snapshot.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}
