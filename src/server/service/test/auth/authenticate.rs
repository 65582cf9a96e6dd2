use super::*;

const SECRET: &str = "test-signing-secret";

/// Tests logging in with the correct id and password.
///
/// Verifies the issued token carries the user's id.
///
/// Expected: Ok((User, token))
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, Duration::hours(1));

    let hashed = hash_password("correct horse")?;
    let student = factory::student::StudentFactory::new(db)
        .hashed_password(hashed)
        .build()
        .await?;

    let (user, token) = AuthService::new(db, &tokens)
        .authenticate(student.id, "correct horse")
        .await?;

    assert_eq!(user.id, student.id);
    let claims = tokens.verify(&token)?;
    assert_eq!(claims.user_id()?, student.id);

    Ok(())
}

/// Tests that a wrong password and an unknown id fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_wrong_password_and_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, Duration::hours(1));
    let (_dir, files) = temp_storage();

    let admin = UserService::new(db, &files)
        .seed_default_admin("admin")
        .await?
        .unwrap();

    let service = AuthService::new(db, &tokens);

    assert!(matches!(
        service.authenticate(admin.id, "nope").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.authenticate(9999, "admin").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a factory user with an unusable hash cannot log in.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unusable_hash() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, Duration::hours(1));

    let user = factory::create_user(db).await?;

    assert!(matches!(
        AuthService::new(db, &tokens)
            .authenticate(user.id, "!unusable")
            .await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
