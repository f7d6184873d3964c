use super::*;

/// Tests replacing the stored password digest.
///
/// Expected: Ok with the new digest stored
#[tokio::test]
async fn stores_new_digest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .psw("old-digest")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.user_id, "new-digest").await?;

    let stored = repo.find_by_id(user.user_id).await?.unwrap();
    assert_eq!(stored.psw, "new-digest");

    Ok(())
}

/// Tests that a password change logs the user out.
///
/// The session token is cleared in the same statement as the digest update,
/// so the old cookie stops authenticating the moment the password changes.
///
/// Expected: session token cleared
#[tokio::test]
async fn clears_session_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .session_token(Some("live-session".to_string()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.user_id, "new-digest").await?;

    let stored = repo.find_by_id(user.user_id).await?.unwrap();
    assert_eq!(stored.session_token, None);
    assert!(repo.find_by_session_token("live-session").await?.is_none());

    Ok(())
}
