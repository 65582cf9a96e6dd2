//! Project domain models and parameters.
//!
//! A project is the accepted outcome of an idea request: a fixed team of students
//! led by one of them and supervised by a doctor and an assistant doctor.

use std::collections::HashMap;

use crate::{
    model::project::{ProjectDto, UpdateProjectDto},
    server::{error::internal::InternalError, model::user::User},
};

/// Project with participant ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub title: String,
    /// Path of the proposal document relative to the files root.
    pub file_url: String,
    pub team_leader_id: i32,
    pub doctor_id: i32,
    pub assistant_doctor_id: i32,
    /// Ids of the students on the team, ascending.
    pub student_ids: Vec<i32>,
}

impl Project {
    /// Converts entity models to a project domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The project row
    /// - `student_ids` - Student ids from the project's junction rows
    pub fn from_entity(entity: entity::project::Model, mut student_ids: Vec<i32>) -> Self {
        student_ids.sort_unstable();

        Self {
            id: entity.id,
            title: entity.title,
            file_url: entity.file_url,
            team_leader_id: entity.team_leader_id,
            doctor_id: entity.doctor_id,
            assistant_doctor_id: entity.assistant_doctor_id,
            student_ids,
        }
    }

    /// Every user id this project references.
    pub fn user_ids(&self) -> impl Iterator<Item = i32> + '_ {
        [self.team_leader_id, self.doctor_id, self.assistant_doctor_id]
            .into_iter()
            .chain(self.student_ids.iter().copied())
    }
}

/// Project with its participants resolved to users.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectView {
    pub id: i32,
    pub title: String,
    pub file_url: String,
    pub team_leader: User,
    pub students: Vec<User>,
    pub doctor: User,
    pub assistant_doctor: User,
}

impl ProjectView {
    /// Resolves a project's participant ids against a user lookup.
    ///
    /// # Returns
    /// - `Ok(ProjectView)` - Every participant was found
    /// - `Err(InternalError::MissingRelatedUser)` - A referenced user is absent from `users`
    pub fn hydrate(project: Project, users: &HashMap<i32, User>) -> Result<Self, InternalError> {
        let owner = format!("project {}", project.id);
        let lookup = |id: i32| {
            users
                .get(&id)
                .cloned()
                .ok_or_else(|| InternalError::MissingRelatedUser {
                    user_id: id,
                    owner: owner.clone(),
                })
        };

        Ok(Self {
            id: project.id,
            title: project.title,
            file_url: project.file_url,
            team_leader: lookup(project.team_leader_id)?,
            students: project
                .student_ids
                .iter()
                .map(|id| lookup(*id))
                .collect::<Result<_, _>>()?,
            doctor: lookup(project.doctor_id)?,
            assistant_doctor: lookup(project.assistant_doctor_id)?,
        })
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            title: self.title,
            file_url: self.file_url,
            team_leader: self.team_leader.into_dto(),
            students: self.students.into_iter().map(User::into_dto).collect(),
            doctor: self.doctor.into_dto(),
            assistant_doctor: self.assistant_doctor.into_dto(),
        }
    }
}

/// Parameters for inserting a project.
#[derive(Debug, Clone)]
pub struct CreateProjectParam {
    pub title: String,
    pub file_url: String,
    pub team_leader_id: i32,
    pub doctor_id: i32,
    pub assistant_doctor_id: i32,
    pub student_ids: Vec<i32>,
}

/// Parameters for replacing a project's team and supervisors.
#[derive(Debug, Clone)]
pub struct UpdateProjectParam {
    pub id: i32,
    pub title: String,
    pub team_leader_id: i32,
    pub doctor_id: i32,
    pub assistant_doctor_id: i32,
    pub student_ids: Vec<i32>,
}

impl UpdateProjectParam {
    pub fn from_dto(id: i32, dto: UpdateProjectDto) -> Self {
        Self {
            id,
            title: dto.title,
            team_leader_id: dto.team_leader_id,
            doctor_id: dto.doctor_id,
            assistant_doctor_id: dto.assistant_doctor_id,
            student_ids: dto.students_ids,
        }
    }
}

/// Optional filters for listing projects; `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub doctor_id: Option<i32>,
    pub assistant_doctor_id: Option<i32>,
}
