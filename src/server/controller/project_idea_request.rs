use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{CreatedIdDto, ErrorDto, ValidationErrorDto},
        project_idea_request::{CreateProjectIdeaRequestForm, ProjectIdeaRequestDto},
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::project_idea_request::{parse_status_filter, CreateProjectIdeaRequestParam},
        service::project_idea_request::ProjectIdeaRequestService,
        state::AppState,
        util::multipart::MultipartForm,
    },
};

pub static PROJECT_IDEA_REQUEST_TAG: &str = "project_idea_request";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    /// Exact status name (`Pending`, `Accepted`, `Rejected`, `Missed`); anything
    /// else applies no filter.
    pub status: Option<String>,
}

/// Reads the submission form, collecting every missing or malformed field.
fn read_create_form(
    mut form: MultipartForm,
) -> Result<CreateProjectIdeaRequestParam, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = form.required_text("title", &mut errors);
    let doctor_id = form.required_i32("doctor_id", &mut errors);
    let assistant_doctor_id = form.required_i32("assistant_doctor_id", &mut errors);
    let student_ids = form.i32_list("students_ids", &mut errors);
    let file = form.required_file("file", &mut errors);

    match (title, doctor_id, assistant_doctor_id, file) {
        (Some(title), Some(doctor_id), Some(assistant_doctor_id), Some(file))
            if errors.is_empty() =>
        {
            Ok(CreateProjectIdeaRequestParam {
                title,
                doctor_id,
                assistant_doctor_id,
                student_ids,
                file,
            })
        }
        _ => Err(errors),
    }
}

/// POST /api/project-idea-requests - Submit a project idea
///
/// The calling student becomes the team leader and is added to the team if
/// not already listed.
#[utoipa::path(
    post,
    path = "/api/project-idea-requests",
    tag = PROJECT_IDEA_REQUEST_TAG,
    security(("bearer_auth" = [])),
    request_body(content = CreateProjectIdeaRequestForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Request submitted", body = CreatedIdDto),
        (status = 400, description = "Invalid form or team", body = ValidationErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto)
    ),
)]
pub async fn create_project_idea_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Student])
        .await?;

    let param = read_create_form(MultipartForm::read(multipart).await?)?;

    let request = ProjectIdeaRequestService::new(&state.db, &state.files)
        .create(student.id, param)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedIdDto { id: request.id })))
}

#[utoipa::path(
    get,
    path = "/api/project-idea-requests/doctor",
    tag = PROJECT_IDEA_REQUEST_TAG,
    security(("bearer_auth" = [])),
    params(StatusQuery),
    responses(
        (status = 200, description = "Requests addressed to the doctor, newest first", body = Vec<ProjectIdeaRequestDto>),
        (status = 403, description = "Caller is not a doctor", body = ErrorDto)
    ),
)]
pub async fn get_doctor_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let doctor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Doctor])
        .await?;

    let requests = ProjectIdeaRequestService::new(&state.db, &state.files)
        .get_for_doctor(doctor.id, parse_status_filter(query.status.as_deref()))
        .await?;

    let dtos: Vec<ProjectIdeaRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/project-idea-requests/student",
    tag = PROJECT_IDEA_REQUEST_TAG,
    security(("bearer_auth" = [])),
    params(StatusQuery),
    responses(
        (status = 200, description = "Requests the student leads, newest first", body = Vec<ProjectIdeaRequestDto>),
        (status = 403, description = "Caller is not a student", body = ErrorDto)
    ),
)]
pub async fn get_student_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Student])
        .await?;

    let requests = ProjectIdeaRequestService::new(&state.db, &state.files)
        .get_for_student(student.id, parse_status_filter(query.status.as_deref()))
        .await?;

    let dtos: Vec<ProjectIdeaRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// PUT /api/project-idea-requests/{id}/accept - Accept a pending request
///
/// Creates the project and marks every other pending request sharing a
/// student as missed.
///
/// # Returns
/// - `204 No Content`: Request accepted
/// - `403 Forbidden`: Not the request's doctor, or the doctor is at capacity
/// - `404 Not Found`: No such request
/// - `409 Conflict`: Request is no longer pending, or a student already has a project
#[utoipa::path(
    put,
    path = "/api/project-idea-requests/{id}/accept",
    tag = PROJECT_IDEA_REQUEST_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request id")),
    responses(
        (status = 204, description = "Request accepted"),
        (status = 403, description = "Not the owning doctor, or capacity reached", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request is not pending, or a student already has a project", body = ErrorDto)
    ),
)]
pub async fn accept_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let doctor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Doctor])
        .await?;

    ProjectIdeaRequestService::new(&state.db, &state.files)
        .accept(id, doctor.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/project-idea-requests/{id}/reject",
    tag = PROJECT_IDEA_REQUEST_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request id")),
    responses(
        (status = 204, description = "Request rejected"),
        (status = 403, description = "Not the owning doctor", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request is not pending", body = ErrorDto)
    ),
)]
pub async fn reject_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let doctor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Doctor])
        .await?;

    ProjectIdeaRequestService::new(&state.db, &state.files)
        .reject(id, doctor.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
