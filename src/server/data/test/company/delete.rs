use super::*;

use crate::server::data::listing::ListingRepository;

/// Tests deleting a company.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn deletes_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::helpers::create_company_with_owner(db).await?;

    let repo = CompanyRepository::new(db);
    repo.delete(company.company_id).await?;

    assert!(repo.find_by_id(company.company_id).await?.is_none());

    Ok(())
}

/// Tests that deleting a company cascades to its listings.
///
/// Expected: listing rows gone with the company
#[tokio::test]
async fn cascades_to_listings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, listing) = factory::helpers::create_listing_with_dependencies(db).await?;

    let repo = CompanyRepository::new(db);
    repo.delete(company.company_id).await?;

    let listing_repo = ListingRepository::new(db);
    assert!(listing_repo.find_by_id(listing.listing_id).await?.is_none());

    Ok(())
}
