use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash a password with Argon2.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {reason}")]
    PasswordHash {
        /// The reason reported by the hasher
        reason: String,
    },

    /// A user referenced by a project or idea request is missing.
    ///
    /// Foreign keys should make this impossible; results in a 500 Internal
    /// Server Error.
    #[error("User {user_id} referenced by {owner} does not exist")]
    MissingRelatedUser {
        /// Id of the missing user
        user_id: i32,
        /// Description of the referencing record
        owner: String,
    },
}
