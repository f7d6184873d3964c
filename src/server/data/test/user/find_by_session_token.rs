use super::*;

/// Tests resolving a session token held by a logged-in user.
///
/// Expected: Ok(Some) with the token holder
#[tokio::test]
async fn finds_user_holding_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .session_token(Some("active-token".to_string()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_session_token("active-token").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().user_id, created.user_id);

    Ok(())
}

/// Tests resolving a token nobody holds.
///
/// A logged-out user (NULL token) must not match either, even though the
/// column is nullable.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_session_token("never-issued").await?;

    assert!(found.is_none());

    Ok(())
}
