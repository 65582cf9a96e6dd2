use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, error::AppError, service::user::UserService, util::file::FileStorage,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the configured database URL, then runs all
/// pending SeaORM migrations so the schema is up to date before any request is
/// served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the files directory so static serving and uploads work on first start.
pub async fn prepare_file_storage(config: &Config) -> Result<FileStorage, AppError> {
    let files = FileStorage::new(config.files_root.clone());
    tokio::fs::create_dir_all(files.files_dir()).await?;

    Ok(files)
}

/// Seeds the default admin account into an empty database.
///
/// Logs a warning when the account is created so operators know to change the
/// default password.
pub async fn seed_default_admin(
    db: &DatabaseConnection,
    files: &FileStorage,
    config: &Config,
) -> Result<(), AppError> {
    if let Some(admin) = UserService::new(db, files)
        .seed_default_admin(&config.default_admin_password)
        .await?
    {
        tracing::warn!(
            "No users found; seeded admin account {}. Change its password.",
            admin.id
        );
    }

    Ok(())
}
