use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Role an endpoint admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    Doctor,
    Student,
}

impl Permission {
    fn role(self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Doctor => Role::Doctor,
            Self::Student => Role::Student,
        }
    }
}

/// Resolves the caller from a bearer token and checks their role.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and returns the calling user.
    ///
    /// An empty `permissions` slice admits any authenticated user; otherwise the
    /// user's role must be one of those listed. The user is reloaded from the
    /// database so deleted accounts and role changes take effect immediately.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with an admitted role
    /// - `Err(AuthError::MissingToken | InvalidToken)` - No usable bearer token
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::AccessDenied)` - Role not admitted
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.bearer_token()?;
        let claims = self.tokens.verify(token)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !permissions.is_empty() && !permissions.iter().any(|p| p.role() == user.role()) {
            return Err(AuthError::AccessDenied(
                user_id,
                format!(
                    "{:?} user requires one of {:?}",
                    user.role(),
                    permissions
                ),
            )
            .into());
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let value = self
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken("Authorization header is not ASCII".to_string()))?;

        value
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}
