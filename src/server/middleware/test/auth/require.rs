use super::*;

/// Tests that any authenticated user passes an empty permission list.
///
/// Expected: Ok(User) for the token's subject
#[tokio::test]
async fn admits_any_role_without_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let student = factory::create_student(db).await?;
    let headers = bearer(&token_for(db, &tokens, student.id).await);

    let user = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(user.id, student.id);

    Ok(())
}

/// Tests that a listed role is admitted among several.
///
/// Expected: Ok(User)
#[tokio::test]
async fn admits_any_listed_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let doctor = factory::create_doctor(db).await?;
    let headers = bearer(&token_for(db, &tokens, doctor.id).await);

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin, Permission::Doctor])
        .await?;

    assert_eq!(user.id, doctor.id);

    Ok(())
}

/// Tests that a role outside the list is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_unlisted_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let student = factory::create_student(db).await?;
    let headers = bearer(&token_for(db, &tokens, student.id).await);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == student.id
    ));

    Ok(())
}

/// Tests requests without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let foreign = TokenService::new("someone-else", Duration::hours(1));

    let user = factory::create_user(db).await?;
    let headers = bearer(&token_for(db, &foreign, user.id).await);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let headers = bearer(&token_for(db, &tokens, user.id).await);
    UserRepository::new(db).delete(user.id).await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}
