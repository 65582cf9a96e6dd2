use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum ProjectIdeaRequestStatusDto {
    Pending,
    Accepted,
    Rejected,
    Missed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProjectIdeaRequestDto {
    pub id: i32,
    pub title: String,
    pub status: ProjectIdeaRequestStatusDto,
    pub file_url: String,
    pub requested_on: DateTime<Utc>,
    pub team_leader: UserDto,
    pub students: Vec<UserDto>,
    pub doctor: UserDto,
    pub assistant_doctor: UserDto,
}

/// Multipart form submitted by a student to propose a project idea.
///
/// `students_ids` may be repeated once per student. Only used for API
/// documentation; the handler reads the multipart stream directly.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct CreateProjectIdeaRequestForm {
    pub title: String,
    pub doctor_id: i32,
    pub assistant_doctor_id: i32,
    pub students_ids: Vec<i32>,
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}
