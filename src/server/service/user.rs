//! Account management.
//!
//! Creation, bulk import, updates, password resets and deletion of users. Deleting
//! a user also removes every project and idea request the user leads or
//! supervises, since those cannot exist without them.

pub mod import;

use std::collections::{BTreeSet, HashSet};

use entity::sea_orm_active_enums::Role;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        project::ProjectRepository, project_idea_request::ProjectIdeaRequestRepository,
        user::UserRepository,
    },
    error::{validation::ValidationErrors, AppError},
    model::{
        project_idea_request::UploadedFile,
        user::{
            CreateUserParam, InsertUserParam, ResetPasswordParam, RoleDetails, UpdateUserParam,
            User,
        },
    },
    service::{
        auth::password::hash_password,
        user::import::{parse_import, ImportKind},
    },
    util::file::FileStorage,
};

/// Id of the admin account created on first start.
pub const DEFAULT_ADMIN_ID: i32 = 1;
pub const DEFAULT_ADMIN_NAME: &str = "Default admin account";

const IMPORT_FILE_FIELD: &str = "file";
const MAX_PROJECTS_FIELD: &str = "max_projects";
pub const NEGATIVE_MAX_PROJECTS: &str = "Max projects must not be negative.";

fn has_negative_capacity(details: &RoleDetails) -> bool {
    matches!(details, RoleDetails::Doctor { max_projects } if *max_projects < 0)
}

fn validate_details(details: &RoleDetails) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if has_negative_capacity(details) {
        errors.add(MAX_PROJECTS_FIELD, NEGATIVE_MAX_PROJECTS);
    }
    errors.into_result()
}

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    files: &'a FileStorage,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `files` - Storage holding idea request documents, cleaned up on delete
    pub fn new(db: &'a DatabaseConnection, files: &'a FileStorage) -> Self {
        Self { db, files }
    }

    /// Creates an account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::ValidationErr)` - Negative `max_projects`
    /// - `Err(AppError::Conflict)` - A user with this id already exists
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        validate_details(&param.details)?;

        let repo = UserRepository::new(self.db);

        if repo.exists(param.id).await? {
            return Err(AppError::Conflict("Id already exists.".to_string()));
        }

        let user = repo
            .insert(InsertUserParam {
                id: param.id,
                name: param.name,
                hashed_password: hash_password(&param.password)?,
                details: param.details,
            })
            .await?;

        tracing::info!("Created {:?} account {}", user.role(), user.id);

        Ok(user)
    }

    /// Creates every account listed in an import file, or none of them.
    ///
    /// Ids repeated within the file or already taken, and rows with a negative
    /// `max_projects`, are reported per id under the `file` field.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of accounts created
    /// - `Err(AppError::BadRequest | CsvErr)` - File is not a usable CSV
    /// - `Err(AppError::ValidationErr)` - Duplicate or taken ids, or negative capacities
    /// - `Err(AppError::DbErr)` - Database error; nothing was inserted
    pub async fn import(&self, kind: ImportKind, file: &UploadedFile) -> Result<usize, AppError> {
        let rows = parse_import(kind, file)?;
        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();

        let mut errors = ValidationErrors::new();
        let mut seen = HashSet::new();
        let duplicated: BTreeSet<i32> = ids.iter().copied().filter(|id| !seen.insert(*id)).collect();
        for id in duplicated {
            errors.add(
                IMPORT_FILE_FIELD,
                format!("Id {} is duplicated in the import file.", id),
            );
        }

        let existing: BTreeSet<i32> = UserRepository::new(self.db)
            .existing_ids(&ids)
            .await?
            .into_iter()
            .collect();
        for id in existing {
            errors.add(IMPORT_FILE_FIELD, format!("Id {} already exists.", id));
        }

        for row in rows.iter().filter(|r| has_negative_capacity(&r.details)) {
            errors.add(
                IMPORT_FILE_FIELD,
                format!("Id {} has a negative max projects count.", row.id),
            );
        }

        errors.into_result()?;

        let mut prepared = Vec::with_capacity(rows.len());
        for row in rows {
            prepared.push(InsertUserParam {
                id: row.id,
                name: row.name,
                hashed_password: hash_password(&row.password)?,
                details: row.details,
            });
        }

        let count = prepared.len();
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);
        for param in prepared {
            repo.insert(param).await?;
        }
        txn.commit().await?;

        tracing::info!("Imported {} accounts ({:?})", count, kind);

        Ok(count)
    }

    /// Updates a user's name and role details.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::ValidationErr)` - Negative `max_projects`
    /// - `Err(AppError::NotFound)` - No user with this id holds the role being updated
    pub async fn update(&self, param: UpdateUserParam) -> Result<User, AppError> {
        validate_details(&param.details)?;

        let role = param.details.role();

        UserRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{:?} not found", role)))
    }

    /// Replaces a user's password.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn reset_password(&self, param: ResetPasswordParam) -> Result<(), AppError> {
        let hashed = hash_password(&param.password)?;

        if !UserRepository::new(self.db)
            .set_password(param.user_id, hashed)
            .await?
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Password reset for user {}", param.user_id);

        Ok(())
    }

    /// Deletes a user and everything that depends on them.
    ///
    /// Within one transaction, removes projects and idea requests the user leads,
    /// supervises or assists, then the user's memberships, details and account.
    /// Stored documents of the removed records are deleted after the commit,
    /// except those a surviving project or request still points at.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if !user_repo.exists(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let project_repo = ProjectRepository::new(&txn);
        let request_repo = ProjectIdeaRequestRepository::new(&txn);

        let project_ids = project_repo.ids_involving(user_id).await?;
        let mut stored_files = BTreeSet::new();
        for id in &project_ids {
            if let Some(project) = project_repo.find_by_id(*id).await? {
                stored_files.insert(project.file_url);
            }
        }

        let requests = request_repo.find_involving(user_id).await?;
        let request_ids: Vec<i32> = requests.iter().map(|r| r.id).collect();
        stored_files.extend(requests.into_iter().map(|r| r.file_url));

        let projects_deleted = project_repo.delete_many(&project_ids).await?;
        let requests_deleted = request_repo.delete_many(&request_ids).await?;
        user_repo.delete(user_id).await?;

        // An accepted request and its project share one document, and either may
        // outlive the other.
        let candidates: Vec<String> = stored_files.iter().cloned().collect();
        let mut in_use = project_repo.file_urls_in_use(&candidates).await?;
        in_use.extend(request_repo.file_urls_in_use(&candidates).await?);
        stored_files.retain(|file| !in_use.contains(file));

        txn.commit().await?;

        for file in stored_files {
            if let Err(err) = self.files.remove(&file).await {
                tracing::warn!("Failed to remove stored file {}: {}", file, err);
            }
        }

        tracing::info!(
            "Deleted user {} with {} projects and {} idea requests",
            user_id,
            projects_deleted,
            requests_deleted
        );

        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Lists users, optionally restricted to one role.
    pub async fn get_all(&self, role: Option<Role>) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).find_all(role).await?)
    }

    pub async fn id_exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).exists(id).await?)
    }

    /// Creates the default admin account when no users exist yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The admin account was created
    /// - `Ok(None)` - Users already exist; nothing changed
    pub async fn seed_default_admin(&self, password: &str) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(None);
        }

        let user = repo
            .insert(InsertUserParam {
                id: DEFAULT_ADMIN_ID,
                name: DEFAULT_ADMIN_NAME.to_string(),
                hashed_password: hash_password(password)?,
                details: RoleDetails::Admin,
            })
            .await?;

        tracing::info!("Created default admin account with id {}", user.id);

        Ok(Some(user))
    }
}
