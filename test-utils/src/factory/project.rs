//! Project factory for creating projects together with their student memberships.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects.
///
/// # Example
///
/// ```rust,ignore
/// let project = ProjectFactory::new(&db, leader.id, doctor.id, assistant.id)
///     .students(vec![leader.id, member.id])
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    file_url: String,
    team_leader_id: i32,
    doctor_id: i32,
    assistant_doctor_id: i32,
    students: Vec<i32>,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory for the given team.
    ///
    /// Defaults:
    /// - title: `"Project {n}"`
    /// - file_url: `"files/project-{n}.pdf"`
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
            title: format!("Project {}", n),
            file_url: format!("files/project-{}.pdf", n),
            team_leader_id,
            doctor_id,
            assistant_doctor_id,
            students: vec![team_leader_id],
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn file_url(mut self, file_url: impl Into<String>) -> Self {
        self.file_url = file_url.into();
        self
    }

    pub fn students(mut self, students: Vec<i32>) -> Self {
        self.students = students;
        self
    }

    /// Builds and inserts the project and one membership row per student.
    ///
    /// # Returns
    /// - `Ok(entity::project::Model)` - Created project entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        let project = entity::project::ActiveModel {
            title: ActiveValue::Set(self.title),
            file_url: ActiveValue::Set(self.file_url),
            team_leader_id: ActiveValue::Set(self.team_leader_id),
            doctor_id: ActiveValue::Set(self.doctor_id),
            assistant_doctor_id: ActiveValue::Set(self.assistant_doctor_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for student_id in self.students {
            entity::project_student::ActiveModel {
                project_id: ActiveValue::Set(project.id),
                student_id: ActiveValue::Set(student_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(project)
    }
}

/// Creates a project for the given team with the leader as its only student.
pub async fn create_project(
    db: &DatabaseConnection,
    team_leader_id: i32,
    doctor_id: i32,
    assistant_doctor_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, team_leader_id, doctor_id, assistant_doctor_id)
        .build()
        .await
}
