use super::*;

use sea_orm::EntityTrait;

/// Tests creating a user from registration parameters.
///
/// Verifies that the repository stores every registration field verbatim and
/// that a fresh user starts without a session token.
///
/// Expected: Ok with user created and no session token
#[tokio::test]
async fn creates_user_from_registration_param() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(registration_param("jane@example.com")).await?;

    assert_eq!(user.forename, "Jane");
    assert_eq!(user.lastname, "Doe");
    assert_eq!(user.sex, "F");
    assert_eq!(user.birthdate, NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.psw, "digest");
    assert_eq!(user.salt, "salt");
    assert_eq!(user.session_token, None);

    // Verify the row exists in the database
    let db_user = entity::prelude::User::find_by_id(user.user_id)
        .one(db)
        .await?;
    assert!(db_user.is_some());
    assert_eq!(db_user.unwrap().email, "jane@example.com");

    Ok(())
}

/// Tests the unique constraint on the email column.
///
/// Verifies that inserting a second user with an already-registered email
/// fails at the database level.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(registration_param("taken@example.com")).await?;

    let result = repo.create(registration_param("taken@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
