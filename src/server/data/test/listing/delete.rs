use super::*;

/// Tests deleting a listing.
///
/// Expected: Ok with the row gone and the company untouched
#[tokio::test]
async fn deletes_listing_without_touching_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, listing) = factory::helpers::create_listing_with_dependencies(db).await?;

    let repo = ListingRepository::new(db);
    repo.delete(listing.listing_id).await?;

    assert!(repo.find_by_id(listing.listing_id).await?.is_none());

    let company_repo = crate::server::data::company::CompanyRepository::new(db);
    assert!(company_repo.find_by_id(company.company_id).await?.is_some());

    Ok(())
}

/// Tests deleting a listing that does not exist.
///
/// Expected: Ok, nothing to remove
#[tokio::test]
async fn deleting_unknown_listing_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListingRepository::new(db);
    repo.delete(999_999).await?;

    Ok(())
}
