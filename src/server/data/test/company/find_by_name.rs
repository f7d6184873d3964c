use super::*;

/// Tests looking up a company by its unique name.
///
/// Expected: Ok(Some) with the matching company
#[tokio::test]
async fn finds_existing_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let created = factory::company::CompanyFactory::new(db, user.user_id)
        .company_name("Lookup Ltd")
        .build()
        .await?;

    let repo = CompanyRepository::new(db);
    let found = repo.find_by_name("Lookup Ltd").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().company_id, created.company_id);

    Ok(())
}

/// Tests looking up a name nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompanyRepository::new(db);
    let found = repo.find_by_name("Nobody Inc").await?;

    assert!(found.is_none());

    Ok(())
}
