//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert the rows an entity depends on only when
//! they own them (doctor and student factories also write their detail rows); foreign keys
//! to other users are passed in explicitly.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let doctor = factory::create_doctor(&db).await?;
//!     let student = factory::create_student(&db).await?;
//!
//!     let request = factory::project_idea_request::ProjectIdeaRequestFactory::new(
//!         &db, student.id, doctor.id, doctor.id,
//!     )
//!     .students(vec![student.id])
//!     .build()
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create bare user entities (admins by default)
//! - `doctor` - Create doctor users with doctor details
//! - `student` - Create student users with student details
//! - `project` - Create projects and their student memberships
//! - `project_idea_request` - Create idea requests and their student memberships
//! - `helpers` - Id generation and multi-entity setups

pub mod doctor;
pub mod helpers;
pub mod project;
pub mod project_idea_request;
pub mod student;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use doctor::{create_doctor, create_doctor_with_capacity};
pub use project::create_project;
pub use project_idea_request::create_pending_request;
pub use student::create_student;
pub use user::create_user;
