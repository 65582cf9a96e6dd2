//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing accounts and their
//! role-specific detail rows. Every method loads the details together with the
//! user so the domain `User` always reflects its role.

use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::Role;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionSession, TransactionTrait,
};

use crate::server::model::user::{InsertUserParam, RoleDetails, UpdateUserParam, User};

async fn insert_details<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    details: &RoleDetails,
) -> Result<(), DbErr> {
    match details {
        RoleDetails::Admin => {}
        RoleDetails::Doctor { max_projects } => {
            entity::prelude::DoctorDetails::insert(entity::doctor_details::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                max_projects: ActiveValue::Set(*max_projects),
                ..Default::default()
            })
            .exec_without_returning(db)
            .await?;
        }
        RoleDetails::Student { gpa } => {
            entity::prelude::StudentDetails::insert(entity::student_details::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                gpa: ActiveValue::Set(*gpa),
                ..Default::default()
            })
            .exec_without_returning(db)
            .await?;
        }
    }

    Ok(())
}

/// Repository providing database operations for user management.
///
/// Generic over the connection so the same queries run on a pooled connection or
/// inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads detail rows for the given users and builds domain models.
    async fn with_details(&self, models: Vec<entity::user::Model>) -> Result<Vec<User>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();

        let mut doctors: HashMap<i32, entity::doctor_details::Model> =
            entity::prelude::DoctorDetails::find()
                .filter(entity::doctor_details::Column::UserId.is_in(ids.clone()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|d| (d.user_id, d))
                .collect();

        let mut students: HashMap<i32, entity::student_details::Model> =
            entity::prelude::StudentDetails::find()
                .filter(entity::student_details::Column::UserId.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.user_id, s))
                .collect();

        Ok(models
            .into_iter()
            .map(|m| {
                let doctor = doctors.remove(&m.id);
                let student = students.remove(&m.id);
                User::from_entity(m, doctor, student)
            })
            .collect())
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with role details
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        Ok(self
            .find_with_password(id)
            .await?
            .map(|(user, _)| user))
    }

    /// Finds a user by id together with the stored password hash.
    ///
    /// Used only by login and must not leak beyond the auth service.
    pub async fn find_with_password(&self, id: i32) -> Result<Option<(User, String)>, DbErr> {
        let Some(model) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let hashed_password = model.hashed_password.clone();
        let user = self.with_details(vec![model]).await?.pop();

        Ok(user.map(|u| (u, hashed_password)))
    }

    /// Finds users by id, keyed by id. Missing ids are absent from the map.
    pub async fn find_many(&self, ids: &[i32]) -> Result<HashMap<i32, User>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(self
            .with_details(models)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect())
    }

    /// Lists users ordered by id, optionally restricted to one role.
    pub async fn find_all(&self, role: Option<Role>) -> Result<Vec<User>, DbErr> {
        let mut query = entity::prelude::User::find().order_by_asc(entity::user::Column::Id);

        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }

        let models = query.all(self.db).await?;
        self.with_details(models).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id).count(self.db).await?;
        Ok(count > 0)
    }

    /// Counts all users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Returns which of `ids` already belong to a user.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<HashSet<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        let found: Vec<i32> = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(found.into_iter().collect())
    }

    /// Returns which of `ids` belong to a user holding `role`.
    pub async fn ids_with_role(&self, ids: &[i32], role: Role) -> Result<HashSet<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        let found: Vec<i32> = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .filter(entity::user::Column::Role.eq(role))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(found.into_iter().collect())
    }

    /// Checks whether `id` belongs to a user holding `role`.
    pub async fn has_role(&self, id: i32, role: Role) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::Role.eq(role))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a user and the detail row matching its role in one transaction.
    ///
    /// The caller is responsible for checking the id is free; a duplicate id
    /// surfaces as a database error.
    ///
    /// # Returns
    /// - `Ok(User)` - The inserted user
    /// - `Err(DbErr)` - Database error, including primary key violations
    pub async fn insert(&self, param: InsertUserParam) -> Result<User, DbErr>
    where
        C: TransactionTrait,
    {
        let txn = self.db.begin().await?;

        entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(param.id),
            name: ActiveValue::Set(param.name.clone()),
            hashed_password: ActiveValue::Set(param.hashed_password),
            role: ActiveValue::Set(param.details.role()),
        })
        .exec_without_returning(&txn)
        .await?;

        insert_details(&txn, param.id, &param.details).await?;

        txn.commit().await?;

        Ok(User {
            id: param.id,
            name: param.name,
            details: param.details,
        })
    }

    /// Updates a user's name and role details.
    ///
    /// Only matches a user that already holds the role implied by `param.details`.
    /// A missing detail row is created.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id and role
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateUserParam) -> Result<Option<User>, DbErr>
    where
        C: TransactionTrait,
    {
        let txn = self.db.begin().await?;

        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Name,
                sea_orm::sea_query::Expr::value(param.name.clone()),
            )
            .filter(entity::user::Column::Id.eq(param.id))
            .filter(entity::user::Column::Role.eq(param.details.role()))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let updated = match &param.details {
            RoleDetails::Admin => 1,
            RoleDetails::Doctor { max_projects } => {
                entity::prelude::DoctorDetails::update_many()
                    .col_expr(
                        entity::doctor_details::Column::MaxProjects,
                        sea_orm::sea_query::Expr::value(*max_projects),
                    )
                    .filter(entity::doctor_details::Column::UserId.eq(param.id))
                    .exec(&txn)
                    .await?
                    .rows_affected
            }
            RoleDetails::Student { gpa } => {
                entity::prelude::StudentDetails::update_many()
                    .col_expr(
                        entity::student_details::Column::Gpa,
                        sea_orm::sea_query::Expr::value(*gpa),
                    )
                    .filter(entity::student_details::Column::UserId.eq(param.id))
                    .exec(&txn)
                    .await?
                    .rows_affected
            }
        };

        if updated == 0 {
            insert_details(&txn, param.id, &param.details).await?;
        }

        txn.commit().await?;

        Ok(Some(User {
            id: param.id,
            name: param.name,
            details: param.details,
        }))
    }

    /// Replaces a user's password hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Password updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_password(&self, user_id: i32, hashed_password: String) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::HashedPassword,
                sea_orm::sea_query::Expr::value(hashed_password),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user along with its detail rows and team memberships.
    ///
    /// Projects and idea requests the user leads or supervises must be removed
    /// first; the foreign keys on those tables do not cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr>
    where
        C: TransactionTrait,
    {
        let txn = self.db.begin().await?;

        entity::prelude::ProjectStudent::delete_many()
            .filter(entity::project_student::Column::StudentId.eq(user_id))
            .exec(&txn)
            .await?;

        entity::prelude::ProjectIdeaRequestStudent::delete_many()
            .filter(entity::project_idea_request_student::Column::StudentId.eq(user_id))
            .exec(&txn)
            .await?;

        entity::prelude::DoctorDetails::delete_many()
            .filter(entity::doctor_details::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        entity::prelude::StudentDetails::delete_many()
            .filter(entity::student_details::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
