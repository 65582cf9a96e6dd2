use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        Components,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{account, project, project_idea_request, user},
    state::AppState,
};

/// Largest accepted request body; covers document and import uploads.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::new);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Graduation Projects API"),
    modifiers(&SecurityAddon),
    tags(
        (name = "account", description = "Login and the current account"),
        (name = "user", description = "Account administration"),
        (name = "project", description = "Accepted projects"),
        (name = "project_idea_request", description = "Project proposals and their review")
    )
)]
struct ApiDoc;

/// API routes with their OpenAPI documentation.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(account::authenticate))
        .routes(routes!(account::get_account))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user, user::delete_user))
        .routes(routes!(user::create_student, user::update_student))
        .routes(routes!(user::import_students))
        .routes(routes!(user::create_doctor, user::update_doctor))
        .routes(routes!(user::import_doctors))
        .routes(routes!(user::create_admin, user::update_admin))
        .routes(routes!(user::reset_password))
        .routes(routes!(user::id_exists))
        .routes(routes!(project::get_projects))
        .routes(routes!(
            project::get_project,
            project::update_project,
            project::delete_project
        ))
        .routes(routes!(project::get_doctor_projects))
        .routes(routes!(project::get_student_project))
        .routes(routes!(project::is_student_in_project))
        .routes(routes!(project::replace_project_file))
        .routes(routes!(project::get_doctor_project_count))
        .routes(routes!(project_idea_request::create_project_idea_request))
        .routes(routes!(project_idea_request::get_doctor_requests))
        .routes(routes!(project_idea_request::get_student_requests))
        .routes(routes!(project_idea_request::accept_request))
        .routes(routes!(project_idea_request::reject_request))
}

/// Builds the application router.
///
/// Serves the API, the Swagger UI at `/swagger-ui` with its document at
/// `/api-docs/openapi.json`, and stored documents under `/files`.
pub fn router(state: AppState) -> Router {
    let (api, openapi) = api_router().split_for_parts();
    let files_dir = state.files.files_dir();

    api.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest_service("/files", ServeDir::new(files_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
