use super::*;

/// Tests listing the companies a user owns.
///
/// Companies owned by other users must not appear in the result.
///
/// Expected: Ok with exactly the owner's companies
#[tokio::test]
async fn lists_only_the_owners_companies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let first = factory::company::create_company(db, owner.user_id).await?;
    let second = factory::company::create_company(db, owner.user_id).await?;
    factory::company::create_company(db, other.user_id).await?;

    let repo = CompanyRepository::new(db);
    let companies = repo.find_by_owner(owner.user_id).await?;

    assert_eq!(companies.len(), 2);
    let ids: Vec<i32> = companies.iter().map(|c| c.company_id).collect();
    assert!(ids.contains(&first.company_id));
    assert!(ids.contains(&second.company_id));

    Ok(())
}

/// Tests listing companies for a user who owns none.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_ownerless_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CompanyRepository::new(db);
    let companies = repo.find_by_owner(user.user_id).await?;

    assert!(companies.is_empty());

    Ok(())
}
