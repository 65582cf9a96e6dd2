use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240221_000001_create_user_table::User, m20240221_000004_create_project_table::Project,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectStudent::Table)
                    .if_not_exists()
                    .col(integer(ProjectStudent::ProjectId))
                    .col(integer(ProjectStudent::StudentId))
                    .primary_key(
                        Index::create()
                            .col(ProjectStudent::ProjectId)
                            .col(ProjectStudent::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_student_project_id")
                            .from(ProjectStudent::Table, ProjectStudent::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_student_student_id")
                            .from(ProjectStudent::Table, ProjectStudent::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectStudent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectStudent {
    Table,
    ProjectId,
    StudentId,
}
