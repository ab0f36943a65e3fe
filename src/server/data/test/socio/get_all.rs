use super::*;

/// Tests listing members when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let members = MemberRepository::new(db).get_all().await?;

    assert!(members.is_empty());

    Ok(())
}

/// Tests that members are ordered by member number regardless of insert order.
///
/// Expected: Ok with members sorted ascending by nro_socio
#[tokio::test]
async fn orders_members_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::socio::MemberFactory::new(db).nro_socio(30).build().await?;
    factory::socio::MemberFactory::new(db).nro_socio(10).build().await?;
    factory::socio::MemberFactory::new(db).nro_socio(20).build().await?;

    let members = MemberRepository::new(db).get_all().await?;
    let numbers: Vec<i32> = members.iter().map(|m| m.nro_socio).collect();

    assert_eq!(numbers, vec![10, 20, 30]);

    Ok(())
}
