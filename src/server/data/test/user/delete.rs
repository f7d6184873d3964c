use super::*;

use crate::server::data::{company::CompanyRepository, listing::ListingRepository};

/// Tests deleting a user.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(user.user_id).await?;

    assert!(repo.find_by_id(user.user_id).await?.is_none());

    Ok(())
}

/// Tests that deleting a user cascades to companies and listings.
///
/// The `company.company_owner` and `listing.employer_id` foreign keys both
/// cascade, so the whole ownership chain disappears with the account.
///
/// Expected: company and listing rows gone
#[tokio::test]
async fn cascades_to_companies_and_listings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, company, listing) = factory::helpers::create_listing_with_dependencies(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(user.user_id).await?;

    let company_repo = CompanyRepository::new(db);
    let listing_repo = ListingRepository::new(db);

    assert!(company_repo.find_by_id(company.company_id).await?.is_none());
    assert!(listing_repo.find_by_id(listing.listing_id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok, nothing to remove
#[tokio::test]
async fn deleting_unknown_user_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.delete(999_999).await?;

    Ok(())
}
