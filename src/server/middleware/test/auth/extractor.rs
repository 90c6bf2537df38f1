use super::*;

async fn state() -> AppState {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.unwrap();

    AppState::new(db, TokenKeys::new(b"test-secret", 3600), crate::server::service::auth::password::MIN_COST)
}

async fn extract(state: &AppState, authorization: Option<String>) -> Result<Principal, AppError> {
    let mut builder = Request::builder().uri("/bookings/all-bookings");
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();

    Principal::from_request_parts(&mut parts, state).await
}

/// Tests extracting a principal from a valid bearer token.
///
/// Expected: Ok(Principal) equal to the one the token was issued for
#[tokio::test]
async fn extracts_principal_from_bearer_token() -> Result<(), AppError> {
    let state = state().await;
    let token = issue_token(&state.token_keys, &admin())?;

    let principal = extract(&state, Some(format!("Bearer {}", token))).await?;

    assert_eq!(principal, admin());

    Ok(())
}

/// Tests a request without an authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() {
    let state = state().await;

    let result = extract(&state, None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a header using a scheme other than bearer.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() {
    let state = state().await;

    let result = extract(&state, Some("Basic dXNlcjpwYXNz".to_string())).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let state = state().await;
    let token = issue_token(&TokenKeys::new(b"someone-else", 3600), &guest())?;

    let result = extract(&state, Some(format!("Bearer {}", token))).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
