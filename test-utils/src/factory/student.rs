//! Student factory for creating student users with their details row.

use crate::factory::{helpers::next_id, user::UNUSABLE_PASSWORD_HASH};
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating student users.
///
/// Inserts the user row with `Role::Student` followed by its `student_details` row.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    name: String,
    gpa: f64,
    hashed_password: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented test id
    /// - name: `"Student {id}"`
    /// - gpa: `3.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            name: format!("Student {}", id),
            gpa: 3.0,
            hashed_password: UNUSABLE_PASSWORD_HASH.to_string(),
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    pub fn hashed_password(mut self, hashed_password: impl Into<String>) -> Self {
        self.hashed_password = hashed_password.into();
        self
    }

    /// Builds and inserts the student user and details.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created student user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            hashed_password: ActiveValue::Set(self.hashed_password),
            role: ActiveValue::Set(Role::Student),
        }
        .insert(self.db)
        .await?;

        entity::student_details::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            gpa: ActiveValue::Set(self.gpa),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(user)
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    StudentFactory::new(db).build().await
}
