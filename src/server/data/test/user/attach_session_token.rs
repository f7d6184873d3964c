use super::*;

/// Tests attaching a session token at login.
///
/// Expected: Ok with the token resolvable afterwards
#[tokio::test]
async fn attaches_token_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.attach_session_token(user.user_id, "fresh-token").await?;

    let found = repo.find_by_session_token("fresh-token").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().user_id, user.user_id);

    Ok(())
}

/// Tests that a new login overwrites the previous session token.
///
/// Only the most recent token may resolve; the overwritten one must behave
/// like it was never issued.
///
/// Expected: old token unresolvable, new token resolvable
#[tokio::test]
async fn overwrites_previous_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .session_token(Some("first-login".to_string()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.attach_session_token(user.user_id, "second-login").await?;

    assert!(repo.find_by_session_token("first-login").await?.is_none());
    assert!(repo.find_by_session_token("second-login").await?.is_some());

    Ok(())
}
