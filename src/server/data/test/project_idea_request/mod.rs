use crate::server::{
    data::project_idea_request::ProjectIdeaRequestRepository,
    model::project_idea_request::InsertProjectIdeaRequestParam,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::ProjectIdeaRequestStatus;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_team, project_idea_request::ProjectIdeaRequestFactory},
};

mod create;
mod delete_many;
mod find_by_doctor;
mod find_by_team_leader;
mod find_pending_sharing_students;
