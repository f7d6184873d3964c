use super::*;

use chrono::Utc;

/// Tests publishing a listing.
///
/// The posting timestamp comes from the server clock, not the parameters.
///
/// Expected: Ok with all fields stored and a recent posted_date
#[tokio::test]
async fn creates_listing_with_server_assigned_posted_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::helpers::create_company_with_owner(db).await?;

    let before = Utc::now();

    let repo = ListingRepository::new(db);
    let listing = repo
        .create(CreateListingParam {
            employer_id: company.company_id,
            job_title: "Backend Engineer".to_string(),
            description: "Build and run the job-board backend".to_string(),
            annual_salary: 100_000,
            remote: true,
        })
        .await?;

    assert_eq!(listing.employer_id, company.company_id);
    assert_eq!(listing.job_title, "Backend Engineer");
    assert_eq!(listing.annual_salary, 100_000);
    assert!(listing.remote);
    assert!(listing.posted_date >= before);
    assert!(listing.posted_date <= Utc::now());

    Ok(())
}

/// Tests that a listing cannot reference a nonexistent company.
///
/// The foreign key on `employer_id` rejects the insert.
///
/// Expected: Err from the database
#[tokio::test]
async fn rejects_unknown_employer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListingRepository::new(db);
    let result = repo
        .create(CreateListingParam {
            employer_id: 999_999,
            job_title: "Orphan".to_string(),
            description: "No company".to_string(),
            annual_salary: 1,
            remote: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
