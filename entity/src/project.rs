use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub file_url: String,
    pub team_leader_id: i32,
    pub doctor_id: i32,
    pub assistant_doctor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TeamLeaderId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TeamLeader,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::DoctorId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Doctor,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssistantDoctorId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    AssistantDoctor,
    #[sea_orm(has_many = "super::project_student::Entity")]
    ProjectStudent,
}

impl Related<super::project_student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectStudent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
