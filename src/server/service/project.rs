//! Project queries and administration.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{project::ProjectRepository, user::UserRepository},
    error::AppError,
    model::project::{Project, ProjectFilter, ProjectView, UpdateProjectParam},
    service::team::{validate_team, ProposedTeam},
    util::file::FileStorage,
};

pub const TEAM_LEADER_ID_FIELD: &str = "team_leader_id";
pub const INVALID_TEAM_LEADER: &str = "Team Leader Id is invalid.";

/// Resolves the participants of each project to users.
///
/// Loads every referenced user in a single query.
pub(crate) async fn hydrate_projects<C: ConnectionTrait>(
    db: &C,
    projects: Vec<Project>,
) -> Result<Vec<ProjectView>, AppError> {
    let mut ids: Vec<i32> = projects.iter().flat_map(|p| p.user_ids()).collect();
    ids.sort_unstable();
    ids.dedup();

    let users: HashMap<_, _> = UserRepository::new(db).find_many(&ids).await?;

    projects
        .into_iter()
        .map(|p| ProjectView::hydrate(p, &users).map_err(AppError::from))
        .collect()
}

/// Service for reading and administering projects.
pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
    files: &'a FileStorage,
}

impl<'a> ProjectService<'a> {
    /// Creates a new ProjectService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `files` - Storage holding project documents
    pub fn new(db: &'a DatabaseConnection, files: &'a FileStorage) -> Self {
        Self { db, files }
    }

    /// Lists projects matching the filter.
    pub async fn get_all(&self, filter: ProjectFilter) -> Result<Vec<ProjectView>, AppError> {
        let projects = ProjectRepository::new(self.db).find_all(filter).await?;
        hydrate_projects(self.db, projects).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProjectView>, AppError> {
        let Some(project) = ProjectRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(hydrate_projects(self.db, vec![project]).await?.pop())
    }

    /// Lists projects a doctor supervises or assists.
    pub async fn get_for_supervisor(&self, doctor_id: i32) -> Result<Vec<ProjectView>, AppError> {
        let projects = ProjectRepository::new(self.db)
            .find_by_supervisor(doctor_id)
            .await?;
        hydrate_projects(self.db, projects).await
    }

    /// The project a student leads or belongs to, if any.
    pub async fn get_for_student(&self, student_id: i32) -> Result<Option<ProjectView>, AppError> {
        let Some(project) = ProjectRepository::new(self.db)
            .find_by_student(student_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(hydrate_projects(self.db, vec![project]).await?.pop())
    }

    pub async fn is_student_in_project(&self, student_id: i32) -> Result<bool, AppError> {
        Ok(ProjectRepository::new(self.db)
            .is_student_in_project(student_id)
            .await?)
    }

    /// Number of projects the user is the main doctor of.
    pub async fn doctor_project_count(&self, doctor_id: i32) -> Result<u64, AppError> {
        Ok(ProjectRepository::new(self.db)
            .count_by_doctor(doctor_id)
            .await?)
    }

    /// Replaces a project's title, supervisors and team.
    ///
    /// The team is validated like an idea request, ignoring the project's own
    /// members, and the team leader must be one of the listed students.
    ///
    /// # Returns
    /// - `Ok(ProjectView)` - The updated project
    /// - `Err(AppError::NotFound)` - No such project
    /// - `Err(AppError::ValidationErr)` - One or more team rules failed
    pub async fn update(&self, param: UpdateProjectParam) -> Result<ProjectView, AppError> {
        let repo = ProjectRepository::new(self.db);

        if repo.find_by_id(param.id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let mut errors = validate_team(
            self.db,
            ProposedTeam {
                student_ids: &param.student_ids,
                doctor_id: param.doctor_id,
                assistant_doctor_id: param.assistant_doctor_id,
            },
            Some(param.id),
        )
        .await?;

        if !param.student_ids.contains(&param.team_leader_id) {
            errors.add(TEAM_LEADER_ID_FIELD, INVALID_TEAM_LEADER);
        }

        errors.into_result()?;

        let id = param.id;
        let project = repo
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        tracing::info!("Updated project {}", id);

        hydrate_projects(self.db, vec![project])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Project {} vanished", id)))
    }

    /// Replaces the contents of a project's document, keeping its path.
    ///
    /// # Returns
    /// - `Ok(())` - File replaced
    /// - `Err(AppError::NotFound)` - No such project
    /// - `Err(AppError::IoErr)` - Failed to write the file
    pub async fn replace_file(&self, id: i32, bytes: &[u8]) -> Result<(), AppError> {
        let Some(project) = ProjectRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("Project not found".to_string()));
        };

        self.files.overwrite(&project.file_url, bytes).await?;

        tracing::info!("Replaced document of project {}", id);

        Ok(())
    }

    /// Deletes a project and its team rows.
    ///
    /// The idea request the project came from keeps its document, so the stored
    /// file is left in place.
    ///
    /// # Returns
    /// - `Ok(())` - Project deleted
    /// - `Err(AppError::NotFound)` - No such project
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = ProjectRepository::new(self.db).delete_many(&[id]).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        tracing::info!("Deleted project {}", id);

        Ok(())
    }
}
