use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Role;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    /// Externally assigned identifier (university id), never generated.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub hashed_password: String,
    pub role: Role,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::doctor_details::Entity")]
    DoctorDetails,
    #[sea_orm(has_one = "super::student_details::Entity")]
    StudentDetails,
}

impl Related<super::doctor_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoctorDetails.def()
    }
}

impl Related<super::student_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
