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
                    .table(DoctorDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(DoctorDetails::Id))
                    .col(integer_uniq(DoctorDetails::UserId))
                    .col(integer(DoctorDetails::MaxProjects))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doctor_details_user_id")
                            .from(DoctorDetails::Table, DoctorDetails::UserId)
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
            .drop_table(Table::drop().table(DoctorDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DoctorDetails {
    Table,
    Id,
    UserId,
    MaxProjects,
}
