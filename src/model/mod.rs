//! API data transfer objects.
//!
//! Request and response bodies exchanged with clients. These types only carry
//! data; conversion from domain models happens in `server::model`.

pub mod account;
pub mod api;
pub mod project;
pub mod project_idea_request;
pub mod user;
