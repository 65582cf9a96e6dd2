use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature, expiry or claim validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid: {0}")]
    InvalidToken(String),

    /// Token subject refers to a user that no longer exists.
    ///
    /// Happens when an account is deleted while one of its tokens is still
    /// valid. Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// User lacks the role required by the endpoint.
    ///
    /// The first field is the user id, the second a description of the check
    /// that failed (logged only). Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Login attempt with an unknown id or a wrong password.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems share a generic client message; the detailed reason is logged
/// at debug level only.
///
/// # Returns
/// - 401 Unauthorized - For missing/invalid tokens, unknown users and bad credentials
/// - 403 Forbidden - For role checks that fail
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Id or password isn't correct")
            }
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
