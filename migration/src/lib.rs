pub use sea_orm_migration::prelude::*;

mod m20240221_000001_create_user_table;
mod m20240221_000002_create_doctor_details_table;
mod m20240221_000003_create_student_details_table;
mod m20240221_000004_create_project_table;
mod m20240221_000005_create_project_student_table;
mod m20240221_000006_create_project_idea_request_table;
mod m20240221_000007_create_project_idea_request_student_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240221_000001_create_user_table::Migration),
            Box::new(m20240221_000002_create_doctor_details_table::Migration),
            Box::new(m20240221_000003_create_student_details_table::Migration),
            Box::new(m20240221_000004_create_project_table::Migration),
            Box::new(m20240221_000005_create_project_student_table::Migration),
            Box::new(m20240221_000006_create_project_idea_request_table::Migration),
            Box::new(m20240221_000007_create_project_idea_request_student_table::Migration),
        ]
    }
}
