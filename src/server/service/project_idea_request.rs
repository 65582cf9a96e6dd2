//! Project idea request submission and the accept/reject workflow.
//!
//! A student submits a request naming a team and two doctors. The named doctor
//! then accepts it, turning it into a project, or rejects it. Accepting a request
//! claims its students, so every other pending request naming one of them is
//! marked missed in the same transaction.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::ProjectIdeaRequestStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        project::ProjectRepository, project_idea_request::ProjectIdeaRequestRepository,
        user::UserRepository,
    },
    error::{idea_request::IdeaRequestError, AppError},
    model::{
        project::{CreateProjectParam, Project},
        project_idea_request::{
            CreateProjectIdeaRequestParam, InsertProjectIdeaRequestParam, ProjectIdeaRequest,
            ProjectIdeaRequestView,
        },
        user::RoleDetails,
    },
    service::team::{validate_team, ProposedTeam},
    util::file::FileStorage,
};

async fn hydrate_requests<C: ConnectionTrait>(
    db: &C,
    requests: Vec<ProjectIdeaRequest>,
) -> Result<Vec<ProjectIdeaRequestView>, AppError> {
    let mut ids: Vec<i32> = requests.iter().flat_map(|r| r.user_ids()).collect();
    ids.sort_unstable();
    ids.dedup();

    let users: HashMap<_, _> = UserRepository::new(db).find_many(&ids).await?;

    requests
        .into_iter()
        .map(|r| ProjectIdeaRequestView::hydrate(r, &users).map_err(AppError::from))
        .collect()
}

/// Loads a request and checks the acting doctor may decide on it.
///
/// Checks, in order: the request exists, the doctor owns it, it is still pending.
async fn find_decidable<C: ConnectionTrait>(
    repo: &ProjectIdeaRequestRepository<'_, C>,
    request_id: i32,
    doctor_id: i32,
) -> Result<ProjectIdeaRequest, AppError> {
    let request = repo
        .find_by_id(request_id)
        .await?
        .ok_or(IdeaRequestError::NotFound(request_id))?;

    if request.doctor_id != doctor_id {
        return Err(IdeaRequestError::NotOwner.into());
    }

    if request.status != ProjectIdeaRequestStatus::Pending {
        return Err(IdeaRequestError::NotPending {
            status: request.status,
        }
        .into());
    }

    Ok(request)
}

/// Service for submitting and deciding on project idea requests.
pub struct ProjectIdeaRequestService<'a> {
    db: &'a DatabaseConnection,
    files: &'a FileStorage,
}

impl<'a> ProjectIdeaRequestService<'a> {
    /// Creates a new ProjectIdeaRequestService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `files` - Storage for uploaded proposal documents
    pub fn new(db: &'a DatabaseConnection, files: &'a FileStorage) -> Self {
        Self { db, files }
    }

    /// Submits a pending idea request led by `student_id`.
    ///
    /// The submitting student is added to the team if the form left them out.
    /// The document is stored only once the team passes validation.
    ///
    /// # Returns
    /// - `Ok(ProjectIdeaRequest)` - The created request
    /// - `Err(AppError::ValidationErr)` - One or more team rules failed
    /// - `Err(AppError::IoErr)` - Failed to store the document
    /// - `Err(AppError::DbErr)` - Database error; the stored document is removed
    pub async fn create(
        &self,
        student_id: i32,
        param: CreateProjectIdeaRequestParam,
    ) -> Result<ProjectIdeaRequest, AppError> {
        let mut student_ids = param.student_ids;
        if !student_ids.contains(&student_id) {
            student_ids.push(student_id);
        }

        validate_team(
            self.db,
            ProposedTeam {
                student_ids: &student_ids,
                doctor_id: param.doctor_id,
                assistant_doctor_id: param.assistant_doctor_id,
            },
            None,
        )
        .await?
        .into_result()?;

        let file_url = self
            .files
            .save(&param.file.file_name, &param.file.bytes)
            .await?;

        let created = ProjectIdeaRequestRepository::new(self.db)
            .create(InsertProjectIdeaRequestParam {
                title: param.title,
                file_url: file_url.clone(),
                team_leader_id: student_id,
                doctor_id: param.doctor_id,
                assistant_doctor_id: param.assistant_doctor_id,
                student_ids,
                requested_on: Utc::now(),
            })
            .await;

        let request = match created {
            Ok(request) => request,
            Err(err) => {
                if let Err(io_err) = self.files.remove(&file_url).await {
                    tracing::warn!("Failed to remove orphaned upload {}: {}", file_url, io_err);
                }
                return Err(err.into());
            }
        };

        tracing::info!(
            "Student {} submitted project idea request {} to doctor {}",
            student_id,
            request.id,
            request.doctor_id
        );

        Ok(request)
    }

    /// Requests addressed to a doctor, newest first.
    pub async fn get_for_doctor(
        &self,
        doctor_id: i32,
        status: Option<ProjectIdeaRequestStatus>,
    ) -> Result<Vec<ProjectIdeaRequestView>, AppError> {
        let requests = ProjectIdeaRequestRepository::new(self.db)
            .find_by_doctor(doctor_id, status)
            .await?;
        hydrate_requests(self.db, requests).await
    }

    /// Requests led by a student, newest first.
    pub async fn get_for_student(
        &self,
        student_id: i32,
        status: Option<ProjectIdeaRequestStatus>,
    ) -> Result<Vec<ProjectIdeaRequestView>, AppError> {
        let requests = ProjectIdeaRequestRepository::new(self.db)
            .find_by_team_leader(student_id, status)
            .await?;
        hydrate_requests(self.db, requests).await
    }

    /// Accepts a pending request on behalf of its doctor.
    ///
    /// Runs in one transaction: creates the project from the request, marks the
    /// request accepted and marks every other pending request sharing a student
    /// missed. Nothing changes when any check fails.
    ///
    /// # Arguments
    /// - `request_id` - Request to accept
    /// - `doctor_id` - Acting doctor
    ///
    /// # Returns
    /// - `Ok(Project)` - The created project
    /// - `Err(IdeaRequestError::NotFound)` - No such request
    /// - `Err(IdeaRequestError::NotOwner)` - Acting doctor is not the request's doctor
    /// - `Err(IdeaRequestError::NotPending)` - Request already decided
    /// - `Err(IdeaRequestError::CapacityReached)` - Doctor supervises `max_projects` projects
    /// - `Err(IdeaRequestError::StudentsInProject)` - A named student already has a project
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn accept(&self, request_id: i32, doctor_id: i32) -> Result<Project, AppError> {
        let txn = self.db.begin().await?;

        let request_repo = ProjectIdeaRequestRepository::new(&txn);
        let project_repo = ProjectRepository::new(&txn);

        let request = find_decidable(&request_repo, request_id, doctor_id).await?;

        let max_projects = match UserRepository::new(&txn).find_by_id(doctor_id).await? {
            Some(doctor) => match doctor.details {
                RoleDetails::Doctor { max_projects } => max_projects,
                _ => 0,
            },
            None => 0,
        };
        let current = project_repo.count_by_doctor(doctor_id).await?;
        if current >= u64::try_from(max_projects).unwrap_or(0) {
            return Err(IdeaRequestError::CapacityReached.into());
        }

        if project_repo
            .any_student_in_project(&request.student_ids, None)
            .await?
        {
            return Err(IdeaRequestError::StudentsInProject.into());
        }

        let project = project_repo
            .create(CreateProjectParam {
                title: request.title,
                file_url: request.file_url,
                team_leader_id: request.team_leader_id,
                doctor_id: request.doctor_id,
                assistant_doctor_id: request.assistant_doctor_id,
                student_ids: request.student_ids,
            })
            .await?;

        request_repo
            .set_status(request.id, ProjectIdeaRequestStatus::Accepted)
            .await?;

        let missed = request_repo
            .find_pending_sharing_students(request.id)
            .await?;
        request_repo.mark_missed(&missed).await?;

        txn.commit().await?;

        tracing::info!(
            "Doctor {} accepted project idea request {} as project {}",
            doctor_id,
            request.id,
            project.id
        );
        if !missed.is_empty() {
            tracing::info!(
                "Marked {} competing project idea requests missed: {:?}",
                missed.len(),
                missed
            );
        }

        Ok(project)
    }

    /// Rejects a pending request on behalf of its doctor.
    ///
    /// # Returns
    /// - `Ok(())` - Request rejected
    /// - `Err(IdeaRequestError::NotFound | NotOwner | NotPending)` - As for `accept`
    pub async fn reject(&self, request_id: i32, doctor_id: i32) -> Result<(), AppError> {
        let repo = ProjectIdeaRequestRepository::new(self.db);

        let request = find_decidable(&repo, request_id, doctor_id).await?;
        repo.set_status(request.id, ProjectIdeaRequestStatus::Rejected)
            .await?;

        tracing::info!(
            "Doctor {} rejected project idea request {}",
            doctor_id,
            request.id
        );

        Ok(())
    }
}
