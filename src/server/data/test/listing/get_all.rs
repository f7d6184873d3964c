use super::*;

use chrono::{Duration, Utc};

/// Seeds three listings with distinct posting dates and returns their ids
/// oldest-first.
async fn seed_listings(db: &sea_orm::DatabaseConnection) -> Result<Vec<i32>, DbErr> {
    let (_, company) = factory::helpers::create_company_with_owner(db).await?;

    let now = Utc::now();
    let mut ids = Vec::new();

    for age_days in [3, 2, 1] {
        let listing = factory::listing::ListingFactory::new(db, company.company_id)
            .posted_date(now - Duration::days(age_days))
            .build()
            .await?;
        ids.push(listing.listing_id);
    }

    Ok(ids)
}

/// Tests the default listing order.
///
/// Expected: all listings, oldest posting first
#[tokio::test]
async fn returns_all_listings_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ids = seed_listings(db).await?;

    let repo = ListingRepository::new(db);
    let listings = repo.get_all(ListListingsParam::default()).await?;

    assert_eq!(listings.len(), 3);
    let returned: Vec<i32> = listings.iter().map(|l| l.listing_id).collect();
    assert_eq!(returned, ids);

    Ok(())
}

/// Tests newest-first ordering.
///
/// Expected: all listings, newest posting first
#[tokio::test]
async fn orders_newest_first_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = seed_listings(db).await?;
    ids.reverse();

    let repo = ListingRepository::new(db);
    let listings = repo
        .get_all(ListListingsParam {
            amount: None,
            new_first: true,
        })
        .await?;

    let returned: Vec<i32> = listings.iter().map(|l| l.listing_id).collect();
    assert_eq!(returned, ids);

    Ok(())
}

/// Tests the result limit.
///
/// Expected: only the requested number of listings
#[tokio::test]
async fn limits_result_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_listings(db).await?;

    let repo = ListingRepository::new(db);
    let listings = repo
        .get_all(ListListingsParam {
            amount: Some(2),
            new_first: false,
        })
        .await?;

    assert_eq!(listings.len(), 2);

    Ok(())
}

/// Tests querying an empty listing table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_listings_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListingRepository::new(db);
    let listings = repo.get_all(ListListingsParam::default()).await?;

    assert!(listings.is_empty());

    Ok(())
}
