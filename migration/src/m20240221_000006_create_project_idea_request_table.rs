use sea_orm_migration::{prelude::*, schema::*};

use super::m20240221_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectIdeaRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectIdeaRequest::Id))
                    .col(string(ProjectIdeaRequest::Title))
                    .col(string_len(ProjectIdeaRequest::Status, 16))
                    .col(string(ProjectIdeaRequest::FileUrl))
                    .col(integer(ProjectIdeaRequest::TeamLeaderId))
                    .col(integer(ProjectIdeaRequest::DoctorId))
                    .col(integer(ProjectIdeaRequest::AssistantDoctorId))
                    .col(timestamp_with_time_zone(ProjectIdeaRequest::RequestedOn))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_idea_request_team_leader_id")
                            .from(ProjectIdeaRequest::Table, ProjectIdeaRequest::TeamLeaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_idea_request_doctor_id")
                            .from(ProjectIdeaRequest::Table, ProjectIdeaRequest::DoctorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_idea_request_assistant_doctor_id")
                            .from(
                                ProjectIdeaRequest::Table,
                                ProjectIdeaRequest::AssistantDoctorId,
                            )
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_idea_request_status")
                    .table(ProjectIdeaRequest::Table)
                    .col(ProjectIdeaRequest::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectIdeaRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectIdeaRequest {
    Table,
    Id,
    Title,
    Status,
    FileUrl,
    TeamLeaderId,
    DoctorId,
    AssistantDoctorId,
    RequestedOn,
}
