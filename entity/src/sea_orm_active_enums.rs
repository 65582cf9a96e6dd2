use sea_orm::entity::prelude::*;

/// Role of an account, stored by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Role {
    #[sea_orm(string_value = "Admin")]
    Admin,
    #[sea_orm(string_value = "Doctor")]
    Doctor,
    #[sea_orm(string_value = "Student")]
    Student,
}

/// Lifecycle status of a project idea request.
///
/// Requests start `Pending`. The owning doctor moves them to `Accepted` or
/// `Rejected`; `Missed` is applied when a competing request that shares a
/// student is accepted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ProjectIdeaRequestStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Accepted")]
    Accepted,
    #[sea_orm(string_value = "Rejected")]
    Rejected,
    #[sea_orm(string_value = "Missed")]
    Missed,
}
