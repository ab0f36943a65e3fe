use super::*;

/// Tests that listings are ordered by year, month and id, newest first.
///
/// Expected: Ok with rows sorted descending and the member joined on each row
#[tokio::test]
async fn orders_newest_period_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::socio::create_member(db).await?;
    let jan_2024 = factory::cobranza::create_due(db, member.nro_socio, 1, 2024).await?;
    let dec_2023 = factory::cobranza::create_due(db, member.nro_socio, 12, 2023).await?;
    let mar_2024 = factory::cobranza::create_due(db, member.nro_socio, 3, 2024).await?;

    let rows = DueRepository::new(db).get_all_with_member(None).await?;
    let ids: Vec<i32> = rows.iter().map(|(due, _)| due.id).collect();

    assert_eq!(ids, vec![mar_2024.id, jan_2024.id, dec_2023.id]);
    assert!(rows
        .iter()
        .all(|(_, socio)| socio.as_ref() == Some(&member)));

    Ok(())
}

/// Tests that the limit caps the number of returned rows.
///
/// Expected: Ok with only the newest `limit` rows
#[tokio::test]
async fn applies_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::socio::create_member(db).await?;
    factory::create_year_of_dues(db, member.nro_socio, 2024).await?;

    let rows = DueRepository::new(db).get_all_with_member(Some(2)).await?;
    let months: Vec<i32> = rows.iter().map(|(due, _)| due.mes).collect();

    assert_eq!(months, vec![12, 11]);

    Ok(())
}
