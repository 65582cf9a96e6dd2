use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::RoleDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AuthenticateDto {
    pub id: i32,
    pub password: String,
}

/// Successful login: the caller's identity plus a bearer token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AuthResultDto {
    pub id: i32,
    pub name: String,
    pub role: RoleDto,
    pub token: String,
}
