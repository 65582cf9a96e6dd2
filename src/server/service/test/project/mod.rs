use super::temp_storage;
use crate::server::{
    error::AppError,
    model::project::{ProjectFilter, UpdateProjectParam},
    service::{
        project::{ProjectService, INVALID_TEAM_LEADER, TEAM_LEADER_ID_FIELD},
        team::{INVALID_ASSISTANT_DOCTOR, STUDENT_IN_PROJECT},
    },
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_team};
