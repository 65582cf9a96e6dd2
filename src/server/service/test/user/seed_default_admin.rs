use super::*;

/// Tests seeding the admin account into an empty database.
///
/// Verifies a second call leaves the database unchanged.
///
/// Expected: Ok(Some(User)) then Ok(None)
#[tokio::test]
async fn seeds_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let service = UserService::new(db, &files);

    let admin = service.seed_default_admin("admin").await?.unwrap();
    assert_eq!(admin.id, DEFAULT_ADMIN_ID);
    assert_eq!(admin.name, DEFAULT_ADMIN_NAME);
    assert_eq!(admin.role(), Role::Admin);

    assert!(service.seed_default_admin("other").await?.is_none());
    assert_eq!(service.get_all(None).await?.len(), 1);

    Ok(())
}

/// Tests seeding when users already exist.
///
/// Expected: Ok(None) and no admin with the default id
#[tokio::test]
async fn skips_when_users_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    factory::create_student(db).await?;

    let service = UserService::new(db, &files);

    assert!(service.seed_default_admin("admin").await?.is_none());
    assert!(!service.id_exists(DEFAULT_ADMIN_ID).await?);

    Ok(())
}
