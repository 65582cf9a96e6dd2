//! Project idea request domain models and parameters.
//!
//! An idea request is a student's proposal for a project, naming the team, the
//! supervising doctor and the assistant doctor. It stays as a historical record
//! after the doctor decides on it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ProjectIdeaRequestStatus;
use sea_orm::ActiveEnum;

use crate::{
    model::project_idea_request::{ProjectIdeaRequestDto, ProjectIdeaRequestStatusDto},
    server::{error::internal::InternalError, model::user::User},
};

/// Idea request with participant ids.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectIdeaRequest {
    pub id: i32,
    pub title: String,
    pub status: ProjectIdeaRequestStatus,
    pub file_url: String,
    pub team_leader_id: i32,
    pub doctor_id: i32,
    pub assistant_doctor_id: i32,
    /// Ids of the students on the proposed team, ascending.
    pub student_ids: Vec<i32>,
    pub requested_on: DateTime<Utc>,
}

impl ProjectIdeaRequest {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The request row
    /// - `student_ids` - Student ids from the request's junction rows
    pub fn from_entity(
        entity: entity::project_idea_request::Model,
        mut student_ids: Vec<i32>,
    ) -> Self {
        student_ids.sort_unstable();

        Self {
            id: entity.id,
            title: entity.title,
            status: entity.status,
            file_url: entity.file_url,
            team_leader_id: entity.team_leader_id,
            doctor_id: entity.doctor_id,
            assistant_doctor_id: entity.assistant_doctor_id,
            student_ids,
            requested_on: entity.requested_on,
        }
    }

    /// Every user id this request references.
    pub fn user_ids(&self) -> impl Iterator<Item = i32> + '_ {
        [self.team_leader_id, self.doctor_id, self.assistant_doctor_id]
            .into_iter()
            .chain(self.student_ids.iter().copied())
    }
}

/// Idea request with its participants resolved to users.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectIdeaRequestView {
    pub id: i32,
    pub title: String,
    pub status: ProjectIdeaRequestStatus,
    pub file_url: String,
    pub requested_on: DateTime<Utc>,
    pub team_leader: User,
    pub students: Vec<User>,
    pub doctor: User,
    pub assistant_doctor: User,
}

impl ProjectIdeaRequestView {
    /// Resolves a request's participant ids against a user lookup.
    ///
    /// # Returns
    /// - `Ok(ProjectIdeaRequestView)` - Every participant was found
    /// - `Err(InternalError::MissingRelatedUser)` - A referenced user is absent from `users`
    pub fn hydrate(
        request: ProjectIdeaRequest,
        users: &HashMap<i32, User>,
    ) -> Result<Self, InternalError> {
        let owner = format!("project idea request {}", request.id);
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
            id: request.id,
            title: request.title,
            status: request.status,
            file_url: request.file_url,
            requested_on: request.requested_on,
            team_leader: lookup(request.team_leader_id)?,
            students: request
                .student_ids
                .iter()
                .map(|id| lookup(*id))
                .collect::<Result<_, _>>()?,
            doctor: lookup(request.doctor_id)?,
            assistant_doctor: lookup(request.assistant_doctor_id)?,
        })
    }

    pub fn into_dto(self) -> ProjectIdeaRequestDto {
        ProjectIdeaRequestDto {
            id: self.id,
            title: self.title,
            status: status_to_dto(self.status),
            file_url: self.file_url,
            requested_on: self.requested_on,
            team_leader: self.team_leader.into_dto(),
            students: self.students.into_iter().map(User::into_dto).collect(),
            doctor: self.doctor.into_dto(),
            assistant_doctor: self.assistant_doctor.into_dto(),
        }
    }
}

pub fn status_to_dto(status: ProjectIdeaRequestStatus) -> ProjectIdeaRequestStatusDto {
    match status {
        ProjectIdeaRequestStatus::Pending => ProjectIdeaRequestStatusDto::Pending,
        ProjectIdeaRequestStatus::Accepted => ProjectIdeaRequestStatusDto::Accepted,
        ProjectIdeaRequestStatus::Rejected => ProjectIdeaRequestStatusDto::Rejected,
        ProjectIdeaRequestStatus::Missed => ProjectIdeaRequestStatusDto::Missed,
    }
}

/// Parses a status filter from a query string.
///
/// Only exact status names are recognised; anything else yields `None`, which
/// callers treat as "no filter".
pub fn parse_status_filter(value: Option<&str>) -> Option<ProjectIdeaRequestStatus> {
    value.and_then(|v| ProjectIdeaRequestStatus::try_from_value(&v.to_string()).ok())
}

/// An uploaded file as received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name supplied by the client, used only for its extension.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Parameters for a student submitting an idea request.
#[derive(Debug, Clone)]
pub struct CreateProjectIdeaRequestParam {
    pub title: String,
    pub doctor_id: i32,
    pub assistant_doctor_id: i32,
    /// Student ids named in the form; the submitting student is added if absent.
    pub student_ids: Vec<i32>,
    pub file: UploadedFile,
}

/// Parameters for inserting an idea request row and its student links.
#[derive(Debug, Clone)]
pub struct InsertProjectIdeaRequestParam {
    pub title: String,
    pub file_url: String,
    pub team_leader_id: i32,
    pub doctor_id: i32,
    pub assistant_doctor_id: i32,
    pub student_ids: Vec<i32>,
    pub requested_on: DateTime<Utc>,
}
