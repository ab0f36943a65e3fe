use super::*;

/// Tests that an update touches every record of the range and nothing else.
///
/// Expected: Ok(6) with January-June paid and July-December untouched
#[tokio::test]
async fn updates_only_records_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::socio::create_member_with_plan(db, "semestral").await?;
    let other = factory::socio::create_member_with_plan(db, "semestral").await?;
    factory::create_year_of_dues(db, member.nro_socio, 2024).await?;
    factory::create_year_of_dues(db, member.nro_socio, 2023).await?;
    let other_march = factory::cobranza::create_due(db, other.nro_socio, 3, 2024).await?;

    let paid_at = Utc::now();
    let repo = DueRepository::new(db);
    let updated = repo
        .update_payment(
            member.nro_socio,
            2024,
            Semester::First.range(),
            true,
            Some(paid_at),
            Decimal::new(1500, 0),
        )
        .await?;

    assert_eq!(updated, 6);

    let first_half = repo
        .get_in_range(member.nro_socio, 2024, Semester::First.range())
        .await?;
    assert_eq!(first_half.len(), 6);
    assert!(first_half
        .iter()
        .all(|due| due.pago && due.fecha_pago.is_some() && due.monto == Decimal::new(1500, 0)));

    let second_half = repo
        .get_in_range(member.nro_socio, 2024, Semester::Second.range())
        .await?;
    assert!(second_half.iter().all(|due| !due.pago && due.fecha_pago.is_none()));

    let previous_year = repo
        .get_in_range(member.nro_socio, 2023, MonthRange::whole_year())
        .await?;
    assert!(previous_year.iter().all(|due| !due.pago));

    let untouched = entity::prelude::Cobranza::find_by_id(other_march.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(untouched, other_march);

    Ok(())
}

/// Tests updating a single-month range.
///
/// Expected: Ok(1) and only that month changes
#[tokio::test]
async fn updates_single_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::socio::create_member(db).await?;
    factory::create_year_of_dues(db, member.nro_socio, 2024).await?;

    let repo = DueRepository::new(db);
    let updated = repo
        .update_payment(
            member.nro_socio,
            2024,
            MonthRange::single(Month::new(9).unwrap()),
            false,
            None,
            Decimal::new(200, 0),
        )
        .await?;

    assert_eq!(updated, 1);

    let year = repo
        .get_in_range(member.nro_socio, 2024, MonthRange::whole_year())
        .await?;
    for due in year {
        let expected = if due.mes == 9 {
            Decimal::new(200, 0)
        } else {
            Decimal::ZERO
        };
        assert_eq!(due.monto, expected);
    }

    Ok(())
}
