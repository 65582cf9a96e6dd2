//! Doctor factory for creating doctor users with their details row.

use crate::factory::{helpers::next_id, user::UNUSABLE_PASSWORD_HASH};
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default project capacity for factory-created doctors.
pub const DEFAULT_MAX_PROJECTS: i32 = 3;

/// Factory for creating doctor users.
///
/// Inserts the user row with `Role::Doctor` followed by its `doctor_details` row.
///
/// # Example
///
/// ```rust,ignore
/// let doctor = DoctorFactory::new(&db).max_projects(1).build().await?;
/// ```
pub struct DoctorFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    name: String,
    max_projects: i32,
    hashed_password: String,
}

impl<'a> DoctorFactory<'a> {
    /// Creates a new DoctorFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented test id
    /// - name: `"Doctor {id}"`
    /// - max_projects: [`DEFAULT_MAX_PROJECTS`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            name: format!("Doctor {}", id),
            max_projects: DEFAULT_MAX_PROJECTS,
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

    pub fn max_projects(mut self, max_projects: i32) -> Self {
        self.max_projects = max_projects;
        self
    }

    pub fn hashed_password(mut self, hashed_password: impl Into<String>) -> Self {
        self.hashed_password = hashed_password.into();
        self
    }

    /// Builds and inserts the doctor user and details.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created doctor user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            hashed_password: ActiveValue::Set(self.hashed_password),
            role: ActiveValue::Set(Role::Doctor),
        }
        .insert(self.db)
        .await?;

        entity::doctor_details::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            max_projects: ActiveValue::Set(self.max_projects),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(user)
    }
}

/// Creates a doctor with default values.
pub async fn create_doctor(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    DoctorFactory::new(db).build().await
}

/// Creates a doctor with a specific project capacity.
pub async fn create_doctor_with_capacity(
    db: &DatabaseConnection,
    max_projects: i32,
) -> Result<entity::user::Model, DbErr> {
    DoctorFactory::new(db)
        .max_projects(max_projects)
        .build()
        .await
}
