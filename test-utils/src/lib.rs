//! Shared test tooling for the graduation API.
//!
//! Tests build an in-memory SQLite schema with [`builder::TestBuilder`] and seed
//! it with the builders in [`factory`]. Each test gets its own database, so tests
//! can run in parallel without cleanup.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn accepts_request() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_all_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let team = factory::helpers::create_team(db, 2).await?;
//!     // exercise the code under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
