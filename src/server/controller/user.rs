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
        api::{CreatedIdDto, ErrorDto, FileUploadForm, ValidationErrorDto},
        user::{
            CreateAdminDto, CreateDoctorDto, CreateStudentDto, ResetPasswordDto, UpdateAdminDto,
            UpdateDoctorDto, UpdateStudentDto, UserDto, UserIdDto,
        },
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::user::{parse_role_filter, CreateUserParam, ResetPasswordParam, UpdateUserParam},
        service::user::{import::ImportKind, UserService},
        state::AppState,
        util::multipart::MultipartForm,
    },
};

pub static USER_TAG: &str = "user";

const IMPORT_FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoleQuery {
    /// Exact role name (`Admin`, `Doctor`, `Student`); anything else lists every user.
    pub role: Option<String>,
}

async fn create_user(
    state: &AppState,
    headers: &HeaderMap,
    param: CreateUserParam,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db, &state.files)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedIdDto { id: user.id })))
}

async fn update_user(
    state: &AppState,
    headers: &HeaderMap,
    param: UpdateUserParam,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db, &state.files)
        .update(param)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn import_users(
    state: &AppState,
    headers: &HeaderMap,
    kind: ImportKind,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, headers)
        .require(&[Permission::Admin])
        .await?;

    let mut form = MultipartForm::read(multipart).await?;
    let mut errors = ValidationErrors::new();
    let Some(file) = form.required_file(IMPORT_FILE_FIELD, &mut errors) else {
        return Err(errors.into());
    };

    UserService::new(&state.db, &state.files)
        .import(kind, &file)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/users/students",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = CreatedIdDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Id already exists", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    create_user(&state, &headers, payload.into()).await
}

#[utoipa::path(
    post,
    path = "/api/users/students/import",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body(content = FileUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 204, description = "Every student in the file was created"),
        (status = 400, description = "File missing, not a CSV, empty or with invalid ids", body = ValidationErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto)
    ),
)]
pub async fn import_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    import_users(&state, &headers, ImportKind::Students, multipart).await
}

#[utoipa::path(
    put,
    path = "/api/users/students",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = UpdateStudentDto,
    responses(
        (status = 204, description = "Student updated"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    update_user(&state, &headers, payload.into()).await
}

#[utoipa::path(
    post,
    path = "/api/users/doctors",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateDoctorDto,
    responses(
        (status = 201, description = "Doctor created", body = CreatedIdDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Id already exists", body = ErrorDto)
    ),
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    create_user(&state, &headers, payload.into()).await
}

#[utoipa::path(
    post,
    path = "/api/users/doctors/import",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body(content = FileUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 204, description = "Every doctor in the file was created"),
        (status = 400, description = "File missing, not a CSV, empty or with invalid ids", body = ValidationErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto)
    ),
)]
pub async fn import_doctors(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    import_users(&state, &headers, ImportKind::Doctors, multipart).await
}

#[utoipa::path(
    put,
    path = "/api/users/doctors",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = UpdateDoctorDto,
    responses(
        (status = 204, description = "Doctor updated"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto)
    ),
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    update_user(&state, &headers, payload.into()).await
}

#[utoipa::path(
    post,
    path = "/api/users/admins",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Admin created", body = CreatedIdDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Id already exists", body = ErrorDto)
    ),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    create_user(&state, &headers, payload.into()).await
}

#[utoipa::path(
    put,
    path = "/api/users/admins",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = UpdateAdminDto,
    responses(
        (status = 204, description = "Admin updated"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto)
    ),
)]
pub async fn update_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    update_user(&state, &headers, payload.into()).await
}

/// DELETE /api/users/{id} - Delete a user and everything depending on them
///
/// Projects and idea requests the user leads, supervises or assists are
/// removed along with the account.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db, &state.files).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/users/reset-password",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = ResetPasswordDto,
    responses(
        (status = 204, description = "Password replaced"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db, &state.files)
        .reset_password(ResetPasswordParam {
            user_id: payload.user_id,
            password: payload.password,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(user) = UserService::new(&state.db, &state.files)
        .get_by_id(id)
        .await?
    else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(RoleQuery),
    responses(
        (status = 200, description = "Users ordered by id", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RoleQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let users = UserService::new(&state.db, &state.files)
        .get_all(parse_role_filter(query.role.as_deref()))
        .await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/users/id-exists - Check whether an id is taken
///
/// Open to anonymous callers so sign-up forms can check ids before submitting.
#[utoipa::path(
    post,
    path = "/api/users/id-exists",
    tag = USER_TAG,
    request_body = UserIdDto,
    responses(
        (status = 200, description = "Whether a user with this id exists", body = bool)
    ),
)]
pub async fn id_exists(
    State(state): State<AppState>,
    Json(payload): Json<UserIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let exists = UserService::new(&state.db, &state.files)
        .id_exists(payload.id)
        .await?;

    Ok((StatusCode::OK, Json(exists)))
}
