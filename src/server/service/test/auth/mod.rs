use super::temp_storage;
use crate::server::{
    error::{auth::AuthError, AppError},
    service::{
        auth::{password::hash_password, token::TokenService, AuthService},
        user::UserService,
    },
};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};

mod authenticate;
