//! Infrastructure helpers shared by controllers and services.

pub mod file;
pub mod multipart;
