use super::*;

/// Tests loading a due record together with its member.
///
/// Expected: Ok(Some) with both sides of the join
#[tokio::test]
async fn finds_due_with_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::socio::create_member_with_plan(db, "anual").await?;
    let due = factory::cobranza::create_due(db, member.nro_socio, 4, 2024).await?;

    let found = DueRepository::new(db).find_with_member(due.id).await?;

    assert_eq!(found, Some((due, Some(member))));

    Ok(())
}

/// Tests looking up an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = DueRepository::new(db).find_with_member(12345).await?;

    assert!(found.is_none());

    Ok(())
}
