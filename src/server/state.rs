//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::{service::auth::token::TokenService, util::file::FileStorage};

/// Shared resources for request handlers.
///
/// Every field is cheap to clone: the database connection is a pool handle,
/// the token service holds pre-derived keys and the file storage is a path.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Storage for uploaded idea request and project documents.
    pub files: FileStorage,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, files: FileStorage) -> Self {
        Self { db, tokens, files }
    }
}
