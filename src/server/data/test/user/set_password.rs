use super::*;

/// Tests replacing a stored password hash.
///
/// Expected: Ok(true) and the new hash is stored
#[tokio::test]
async fn replaces_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_password(user.id, "new-hash".to_string()).await?;

    assert!(updated);
    let (_, hash) = repo.find_with_password(user.id).await?.unwrap();
    assert_eq!(hash, "new-hash");

    Ok(())
}

/// Tests setting a password for an unknown user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.set_password(404, "hash".to_string()).await?);

    Ok(())
}
