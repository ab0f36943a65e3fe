use super::*;

/// Tests that only months inside the range, for the same member and year, are reported.
///
/// Expected: Ok with the months of the first semester that already exist
#[tokio::test]
async fn reports_existing_months_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::socio::create_member(db).await?;
    let other = factory::socio::create_member(db).await?;
    factory::cobranza::create_due(db, member.nro_socio, 2, 2024).await?;
    factory::cobranza::create_due(db, member.nro_socio, 5, 2024).await?;
    factory::cobranza::create_due(db, member.nro_socio, 8, 2024).await?;
    factory::cobranza::create_due(db, member.nro_socio, 3, 2023).await?;
    factory::cobranza::create_due(db, other.nro_socio, 3, 2024).await?;

    let mut months = DueRepository::new(db)
        .get_existing_months(member.nro_socio, 2024, Semester::First.range())
        .await?;
    months.sort();

    assert_eq!(months, vec![2, 5]);

    Ok(())
}
