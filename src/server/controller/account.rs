use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        account::{AuthResultDto, AuthenticateDto},
        api::ErrorDto,
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::role_to_dto,
        service::auth::AuthService,
        state::AppState,
    },
};

pub static ACCOUNT_TAG: &str = "account";

/// POST /api/account/authenticate - Log in with id and password
///
/// # Returns
/// - `200 OK`: The user's identity and a bearer token
/// - `401 Unauthorized`: Unknown id or wrong password
#[utoipa::path(
    post,
    path = "/api/account/authenticate",
    tag = ACCOUNT_TAG,
    request_body = AuthenticateDto,
    responses(
        (status = 200, description = "Authenticated", body = AuthResultDto),
        (status = 401, description = "Id or password isn't correct", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authenticate(
    State(state): State<AppState>,
    Json(payload): Json<AuthenticateDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db, &state.tokens)
        .authenticate(payload.id, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AuthResultDto {
            id: user.id,
            role: role_to_dto(user.role()),
            name: user.name,
            token,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/account",
    tag = ACCOUNT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The calling user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_account(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
