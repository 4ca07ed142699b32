use super::*;

/// Tests the optional guard without a header.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).optional().await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the optional guard with a valid token.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_user_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tokens = tokens();
    let headers = bearer(&tokens.issue(user.id)?);

    let result = AuthGuard::new(db, &tokens, &headers).optional().await?;

    assert_eq!(result.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that a present but invalid token is still rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let headers = bearer("forged");

    let result = AuthGuard::new(db, &tokens, &headers).optional().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
