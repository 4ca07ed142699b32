use super::*;

/// Tests resolving a valid bearer token.
///
/// Expected: Ok(User) for the token's subject
#[tokio::test]
async fn resolves_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tokens = tokens();
    let headers = bearer(&tokens.issue(user.id)?);

    let resolved = AuthGuard::new(db, &tokens, &headers).require().await?;

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.username, user.username);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests header values that are not bearer tokens.
///
/// Expected: Err(AuthError::InvalidToken) for each
#[tokio::test]
async fn fails_with_malformed_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();

    for value in ["Basic dXNlcjpwYXNz", "Bearer", "garbage", "Bearer not.a.jwt"] {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));

        let result = AuthGuard::new(db, &tokens, &headers).require().await;

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::InvalidToken(_)))),
            "header {:?} should be rejected",
            value
        );
    }

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_user_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let user_id = user.id;
    let tokens = tokens();
    let headers = bearer(&tokens.issue(user_id)?);

    user.delete(db).await?;

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user_id
    ));

    Ok(())
}
