use super::*;

/// Tests a partial profile update.
///
/// Only the provided fields may change; the rest keep their stored values.
///
/// Expected: Ok(Some) with forename changed and lastname untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .forename("Before")
        .lastname("Unchanged")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.user_id,
            UpdateUserParam {
                forename: Some("After".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.forename, "After");
    assert_eq!(updated.lastname, "Unchanged");
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating every profile field at once.
///
/// Expected: Ok(Some) with all four fields replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.user_id,
            UpdateUserParam {
                forename: Some("New".to_string()),
                lastname: Some("Name".to_string()),
                sex: Some("M".to_string()),
                birthdate: NaiveDate::from_ymd_opt(1985, 3, 2),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.forename, "New");
    assert_eq!(updated.lastname, "Name");
    assert_eq!(updated.sex, "M");
    assert_eq!(updated.birthdate, NaiveDate::from_ymd_opt(1985, 3, 2).unwrap());

    Ok(())
}

/// Tests an update with no fields set.
///
/// Expected: Ok(Some) returning the stored row unchanged
#[tokio::test]
async fn empty_update_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .forename("Stays")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(user.user_id, UpdateUserParam::default())
        .await?
        .unwrap();

    assert_eq!(updated.forename, "Stays");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            999_999,
            UpdateUserParam {
                forename: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
