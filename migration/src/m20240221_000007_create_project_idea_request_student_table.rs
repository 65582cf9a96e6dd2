use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240221_000001_create_user_table::User,
    m20240221_000006_create_project_idea_request_table::ProjectIdeaRequest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectIdeaRequestStudent::Table)
                    .if_not_exists()
                    .col(integer(ProjectIdeaRequestStudent::RequestId))
                    .col(integer(ProjectIdeaRequestStudent::StudentId))
                    .primary_key(
                        Index::create()
                            .col(ProjectIdeaRequestStudent::RequestId)
                            .col(ProjectIdeaRequestStudent::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_idea_request_student_request_id")
                            .from(
                                ProjectIdeaRequestStudent::Table,
                                ProjectIdeaRequestStudent::RequestId,
                            )
                            .to(ProjectIdeaRequest::Table, ProjectIdeaRequest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_idea_request_student_student_id")
                            .from(
                                ProjectIdeaRequestStudent::Table,
                                ProjectIdeaRequestStudent::StudentId,
                            )
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Speeds up the shared-student lookup run on every acceptance.
        manager
            .create_index(
                Index::create()
                    .name("idx_project_idea_request_student_student_id")
                    .table(ProjectIdeaRequestStudent::Table)
                    .col(ProjectIdeaRequestStudent::StudentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ProjectIdeaRequestStudent::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectIdeaRequestStudent {
    Table,
    RequestId,
    StudentId,
}
