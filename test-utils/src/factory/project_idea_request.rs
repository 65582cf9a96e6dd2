//! Idea request factory for creating requests together with their student memberships.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ProjectIdeaRequestStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test project idea requests.
///
/// # Example
///
/// ```rust,ignore
/// let request = ProjectIdeaRequestFactory::new(&db, leader.id, doctor.id, assistant.id)
///     .students(vec![leader.id, member.id])
///     .status(ProjectIdeaRequestStatus::Rejected)
///     .build()
///     .await?;
/// ```
pub struct ProjectIdeaRequestFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    status: ProjectIdeaRequestStatus,
    file_url: String,
    team_leader_id: i32,
    doctor_id: i32,
    assistant_doctor_id: i32,
    requested_on: DateTime<Utc>,
    students: Vec<i32>,
}

impl<'a> ProjectIdeaRequestFactory<'a> {
    /// Creates a new ProjectIdeaRequestFactory for the given team.
    ///
    /// Defaults:
    /// - title: `"Idea {n}"`
    /// - status: `Pending`
    /// - file_url: `"files/idea-{n}.pdf"`
    /// - requested_on: now
    /// - students: the team leader only
    pub fn new(
        db: &'a DatabaseConnection,
        team_leader_id: i32,
        doctor_id: i32,
        assistant_doctor_id: i32,
    ) -> Self {
        let n = next_id();
        Self {
            db,
            title: format!("Idea {}", n),
            status: ProjectIdeaRequestStatus::Pending,
            file_url: format!("files/idea-{}.pdf", n),
            team_leader_id,
            doctor_id,
            assistant_doctor_id,
            requested_on: Utc::now(),
            students: vec![team_leader_id],
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: ProjectIdeaRequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn file_url(mut self, file_url: impl Into<String>) -> Self {
        self.file_url = file_url.into();
        self
    }

    pub fn requested_on(mut self, requested_on: DateTime<Utc>) -> Self {
        self.requested_on = requested_on;
        self
    }

    pub fn students(mut self, students: Vec<i32>) -> Self {
        self.students = students;
        self
    }

    /// Builds and inserts the request and one membership row per student.
    ///
    /// # Returns
    /// - `Ok(entity::project_idea_request::Model)` - Created request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::project_idea_request::Model, DbErr> {
        let request = entity::project_idea_request::ActiveModel {
            title: ActiveValue::Set(self.title),
            status: ActiveValue::Set(self.status),
            file_url: ActiveValue::Set(self.file_url),
            team_leader_id: ActiveValue::Set(self.team_leader_id),
            doctor_id: ActiveValue::Set(self.doctor_id),
            assistant_doctor_id: ActiveValue::Set(self.assistant_doctor_id),
            requested_on: ActiveValue::Set(self.requested_on),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for student_id in self.students {
            entity::project_idea_request_student::ActiveModel {
                request_id: ActiveValue::Set(request.id),
                student_id: ActiveValue::Set(student_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(request)
    }
}

/// Creates a pending request naming the given students.
pub async fn create_pending_request(
    db: &DatabaseConnection,
    team_leader_id: i32,
    doctor_id: i32,
    assistant_doctor_id: i32,
    students: Vec<i32>,
) -> Result<entity::project_idea_request::Model, DbErr> {
    ProjectIdeaRequestFactory::new(db, team_leader_id, doctor_id, assistant_doctor_id)
        .students(students)
        .build()
        .await
}
