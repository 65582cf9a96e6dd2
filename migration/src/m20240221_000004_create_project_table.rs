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
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string(Project::Title))
                    .col(string(Project::FileUrl))
                    .col(integer(Project::TeamLeaderId))
                    .col(integer(Project::DoctorId))
                    .col(integer(Project::AssistantDoctorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_team_leader_id")
                            .from(Project::Table, Project::TeamLeaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_doctor_id")
                            .from(Project::Table, Project::DoctorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_assistant_doctor_id")
                            .from(Project::Table, Project::AssistantDoctorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_doctor_id")
                    .table(Project::Table)
                    .col(Project::DoctorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Project {
    Table,
    Id,
    Title,
    FileUrl,
    TeamLeaderId,
    DoctorId,
    AssistantDoctorId,
}
