//! HTTP handlers for the REST API.
//!
//! Each handler checks access with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts request DTOs to service parameters and converts the results back to DTOs.

pub mod account;
pub mod project;
pub mod project_idea_request;
pub mod user;
