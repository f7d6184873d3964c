use super::*;

use sea_orm::EntityTrait;

/// Tests registering a company.
///
/// Expected: Ok with the company linked to its owner
#[tokio::test]
async fn creates_company_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CompanyRepository::new(db);
    let company = repo.create("Acme".to_string(), user.user_id).await?;

    assert_eq!(company.company_name, "Acme");
    assert_eq!(company.company_owner, user.user_id);

    // Verify the row exists in the database
    let db_company = entity::prelude::Company::find_by_id(company.company_id)
        .one(db)
        .await?;
    assert!(db_company.is_some());
    assert_eq!(db_company.unwrap().company_name, "Acme");

    Ok(())
}

/// Tests the unique constraint on the company name.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CompanyRepository::new(db);
    repo.create("Taken".to_string(), user.user_id).await?;

    let result = repo.create("Taken".to_string(), user.user_id).await;

    assert!(result.is_err());

    Ok(())
}
