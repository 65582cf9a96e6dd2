//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Each repository is generic over `ConnectionTrait` so it can run inside a transaction.

pub mod project;
pub mod project_idea_request;
pub mod user;
