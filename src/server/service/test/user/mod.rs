use super::temp_storage;
use crate::server::{
    data::{
        project::ProjectRepository, project_idea_request::ProjectIdeaRequestRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        project_idea_request::UploadedFile,
        user::{CreateUserParam, ResetPasswordParam, RoleDetails, UpdateUserParam},
    },
    service::{
        auth::password::verify_password,
        user::{
            import::ImportKind, UserService, DEFAULT_ADMIN_ID, DEFAULT_ADMIN_NAME,
            NEGATIVE_MAX_PROJECTS,
        },
    },
};
use entity::sea_orm_active_enums::Role;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_team};

mod delete;
mod import;
mod seed_default_admin;
