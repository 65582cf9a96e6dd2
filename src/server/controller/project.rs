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
        api::{ErrorDto, FileUploadForm, ValidationErrorDto},
        project::{ProjectDto, UpdateProjectDto},
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::project::{ProjectFilter, UpdateProjectParam},
        service::project::ProjectService,
        state::AppState,
        util::multipart::MultipartForm,
    },
};

pub static PROJECT_TAG: &str = "project";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectFilterQuery {
    pub doctor_id: Option<i32>,
    pub assistant_doctor_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    security(("bearer_auth" = [])),
    params(ProjectFilterQuery),
    responses(
        (status = 200, description = "Projects matching the filter", body = Vec<ProjectDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ProjectFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let projects = ProjectService::new(&state.db, &state.files)
        .get_all(ProjectFilter {
            doctor_id: query.doctor_id,
            assistant_doctor_id: query.assistant_doctor_id,
        })
        .await?;

    let dtos: Vec<ProjectDto> = projects.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project", body = ProjectDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Some(project) = ProjectService::new(&state.db, &state.files)
        .get_by_id(id)
        .await?
    else {
        return Err(AppError::NotFound("Project not found".to_string()));
    };

    Ok((StatusCode::OK, Json(project.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ProjectService::new(&state.db, &state.files)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/projects/doctor - Projects the calling doctor supervises or assists
#[utoipa::path(
    get,
    path = "/api/projects/doctor",
    tag = PROJECT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The doctor's projects", body = Vec<ProjectDto>),
        (status = 403, description = "Caller is not a doctor", body = ErrorDto)
    ),
)]
pub async fn get_doctor_projects(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let doctor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Doctor])
        .await?;

    let projects = ProjectService::new(&state.db, &state.files)
        .get_for_supervisor(doctor.id)
        .await?;

    let dtos: Vec<ProjectDto> = projects.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/projects/student - The calling student's project, or null
#[utoipa::path(
    get,
    path = "/api/projects/student",
    tag = PROJECT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The student's project, or null", body = Option<ProjectDto>),
        (status = 403, description = "Caller is not a student", body = ErrorDto)
    ),
)]
pub async fn get_student_project(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Student])
        .await?;

    let project = ProjectService::new(&state.db, &state.files)
        .get_for_student(student.id)
        .await?;

    Ok((StatusCode::OK, Json(project.map(|p| p.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/projects/students/{id}/membership",
    tag = PROJECT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Whether the student is on a project team", body = bool),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn is_student_in_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let in_project = ProjectService::new(&state.db, &state.files)
        .is_student_in_project(id)
        .await?;

    Ok((StatusCode::OK, Json(in_project)))
}

/// PUT /api/projects/{id} - Replace a project's title, supervisors and team
///
/// # Returns
/// - `200 OK`: The updated project
/// - `400 Bad Request`: Field-level validation errors
/// - `404 Not Found`: No such project
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project id")),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Invalid team", body = ValidationErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let project = ProjectService::new(&state.db, &state.files)
        .update(UpdateProjectParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}/file",
    tag = PROJECT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project id")),
    request_body(content = FileUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 204, description = "Document replaced"),
        (status = 400, description = "File missing", body = ValidationErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn replace_project_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let mut form = MultipartForm::read(multipart).await?;
    let mut errors = ValidationErrors::new();
    let Some(file) = form.required_file("file", &mut errors) else {
        return Err(errors.into());
    };

    ProjectService::new(&state.db, &state.files)
        .replace_file(id, &file.bytes)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/projects/doctors/{id}/count",
    tag = PROJECT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "Number of projects the doctor supervises", body = u64),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_doctor_project_count(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let count = ProjectService::new(&state.db, &state.files)
        .doctor_project_count(id)
        .await?;

    Ok((StatusCode::OK, Json(count)))
}
