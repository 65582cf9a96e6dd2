//! User factory for creating test user entities.
//!
//! This module creates bare user rows without role details. Use the `doctor`
//! and `student` factories when detail rows are needed.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored in `hashed_password` by factories.
///
/// Not a valid PHC string, so it never verifies against any password.
pub const UNUSABLE_PASSWORD_HASH: &str = "!unusable";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .id(42)
///     .name("CustomUser")
///     .role(Role::Admin)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    name: String,
    role: Role,
    hashed_password: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented test id
    /// - name: `"User {id}"`
    /// - role: `Role::Admin`
    /// - hashed_password: [`UNUSABLE_PASSWORD_HASH`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            name: format!("User {}", id),
            role: Role::Admin,
            hashed_password: UNUSABLE_PASSWORD_HASH.to_string(),
        }
    }

    /// Sets the user id.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role.
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Sets the stored password hash.
    pub fn hashed_password(mut self, hashed_password: impl Into<String>) -> Self {
        self.hashed_password = hashed_password.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            hashed_password: ActiveValue::Set(self.hashed_password),
            role: ActiveValue::Set(self.role),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
