//! Login with user id and password.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::{password::verify_password, token::TokenService},
};

/// Service for verifying credentials and issuing access tokens.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign the issued token
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies a user's id and password and issues a token.
    ///
    /// Unknown ids and wrong passwords produce the same error so callers cannot
    /// probe which ids exist.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The authenticated user and a signed token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown id or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn authenticate(&self, id: i32, password: &str) -> Result<(User, String), AppError> {
        let Some((user, hashed_password)) =
            UserRepository::new(self.db).find_with_password(id).await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hashed_password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user)?;

        tracing::info!("User {} authenticated", user.id);

        Ok((user, token))
    }
}
