//! Validation of a proposed project team.
//!
//! Both idea request submission and project updates name a set of students, a
//! doctor and an assistant doctor. The same rules apply to both, except that a
//! project update ignores the project's own current team.

use std::collections::HashSet;

use entity::sea_orm_active_enums::Role;
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::{project::ProjectRepository, user::UserRepository},
    error::validation::ValidationErrors,
};

pub const STUDENTS_IDS_FIELD: &str = "students_ids";
pub const DOCTOR_ID_FIELD: &str = "doctor_id";
pub const ASSISTANT_DOCTOR_ID_FIELD: &str = "assistant_doctor_id";

pub const INVALID_STUDENTS: &str = "Students Ids value is invalid.";
pub const STUDENT_IN_PROJECT: &str = "One or more student is in a project.";
pub const INVALID_DOCTOR: &str = "Doctor Id is invalid.";
pub const INVALID_ASSISTANT_DOCTOR: &str = "Assistant Doctor Id is invalid.";

/// Team named by an idea request or project update.
#[derive(Debug, Clone, Copy)]
pub struct ProposedTeam<'t> {
    pub student_ids: &'t [i32],
    pub doctor_id: i32,
    pub assistant_doctor_id: i32,
}

/// Checks a proposed team and records every failing rule.
///
/// Rules:
/// - every student id belongs to a distinct Student (`students_ids`)
/// - no student is already on a project team, other than `excluding_project` (`students_ids`)
/// - the doctor and assistant doctor are Doctors (`doctor_id`, `assistant_doctor_id`)
///
/// # Arguments
/// - `db` - Connection or transaction to query
/// - `team` - The proposed team
/// - `excluding_project` - Project whose own members do not count as taken
///
/// # Returns
/// - `Ok(ValidationErrors)` - Recorded failures; empty when the team is valid
/// - `Err(DbErr)` - Database error during a check
pub async fn validate_team<C: ConnectionTrait>(
    db: &C,
    team: ProposedTeam<'_>,
    excluding_project: Option<i32>,
) -> Result<ValidationErrors, DbErr> {
    let mut errors = ValidationErrors::new();
    let user_repo = UserRepository::new(db);
    let project_repo = ProjectRepository::new(db);

    let distinct: HashSet<i32> = team.student_ids.iter().copied().collect();
    let students = user_repo
        .ids_with_role(team.student_ids, Role::Student)
        .await?;
    if distinct.len() != team.student_ids.len() || students.len() != team.student_ids.len() {
        errors.add(STUDENTS_IDS_FIELD, INVALID_STUDENTS);
    }

    if project_repo
        .any_student_in_project(team.student_ids, excluding_project)
        .await?
    {
        errors.add(STUDENTS_IDS_FIELD, STUDENT_IN_PROJECT);
    }

    if !user_repo.has_role(team.doctor_id, Role::Doctor).await? {
        errors.add(DOCTOR_ID_FIELD, INVALID_DOCTOR);
    }

    if !user_repo
        .has_role(team.assistant_doctor_id, Role::Doctor)
        .await?
    {
        errors.add(ASSISTANT_DOCTOR_ID_FIELD, INVALID_ASSISTANT_DOCTOR);
    }

    Ok(errors)
}
