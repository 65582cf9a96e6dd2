use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub title: String,
    pub file_url: String,
    pub team_leader: UserDto,
    pub students: Vec<UserDto>,
    pub doctor: UserDto,
    pub assistant_doctor: UserDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateProjectDto {
    pub title: String,
    pub team_leader_id: i32,
    pub doctor_id: i32,
    pub assistant_doctor_id: i32,
    pub students_ids: Vec<i32>,
}
