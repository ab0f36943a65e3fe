use super::*;

/// Tests finding an existing member.
///
/// Expected: Ok(Some) with the stored member
#[tokio::test]
async fn finds_existing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::socio::create_member_with_plan(db, "semestral").await?;

    let found = MemberRepository::new(db)
        .find_by_number(member.nro_socio)
        .await?;

    assert_eq!(found, Some(member));

    Ok(())
}

/// Tests looking up a member number that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = MemberRepository::new(db).find_by_number(999_999).await?;

    assert!(found.is_none());

    Ok(())
}
