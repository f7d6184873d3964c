use super::*;

/// Tests a partial listing update.
///
/// Only the provided fields may change; the posting date never changes on
/// update.
///
/// Expected: Ok(Some) with salary changed, title and posted_date untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, listing) = factory::helpers::create_listing_with_dependencies(db).await?;

    let repo = ListingRepository::new(db);
    let updated = repo
        .update(
            listing.listing_id,
            UpdateListingParam {
                annual_salary: Some(120_000),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.annual_salary, 120_000);
    assert_eq!(updated.job_title, listing.job_title);
    assert_eq!(updated.posted_date, listing.posted_date);

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

    let (_, _, listing) = factory::helpers::create_listing_with_dependencies(db).await?;

    let repo = ListingRepository::new(db);
    let updated = repo
        .update(listing.listing_id, UpdateListingParam::default())
        .await?
        .unwrap();

    assert_eq!(updated.job_title, listing.job_title);
    assert_eq!(updated.annual_salary, listing.annual_salary);

    Ok(())
}

/// Tests updating a listing that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListingRepository::new(db);
    let updated = repo
        .update(
            999_999,
            UpdateListingParam {
                remote: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
