//! SeaORM entity definitions for the graduation project schema.

pub mod prelude;

pub mod doctor_details;
pub mod project;
pub mod project_idea_request;
pub mod project_idea_request_student;
pub mod project_student;
pub mod sea_orm_active_enums;
pub mod student_details;
pub mod user;
