use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::ProjectIdeaRequestStatus;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the accept/reject workflow, in the order they are checked.
#[derive(Error, Debug, PartialEq)]
pub enum IdeaRequestError {
    #[error("Project idea request {0} not found")]
    NotFound(i32),

    /// Acting doctor is not the doctor named on the request.
    #[error("Only owner doctor can accept this request.")]
    NotOwner,

    /// Request already left the `Pending` state.
    #[error("Idea is already {status:?}")]
    NotPending { status: ProjectIdeaRequestStatus },

    /// Doctor already supervises `max_projects` projects.
    #[error("Can not accept any more projects you have reached to the max projects count.")]
    CapacityReached,

    /// A named student joined another project team while the request was pending.
    #[error("One or more students of this idea are already in a project.")]
    StudentsInProject,
}

/// Converts workflow errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - Request does not exist
/// - 403 Forbidden - Not the owning doctor, or doctor at capacity
/// - 409 Conflict - Request is no longer pending, or its team is taken
impl IntoResponse for IdeaRequestError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotOwner | Self::CapacityReached => StatusCode::FORBIDDEN,
            Self::NotPending { .. } | Self::StudentsInProject => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
