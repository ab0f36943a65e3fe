use super::*;

/// Tests creating an unpaid record.
///
/// Expected: Ok with zero amount, unpaid and no payment date
#[tokio::test]
async fn creates_unpaid_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::socio::create_member(db).await?;

    let due = DueRepository::new(db)
        .create(member.nro_socio, 7, 2024)
        .await?;

    assert_eq!(due.nro_socio, member.nro_socio);
    assert_eq!((due.mes, due.anio), (7, 2024));
    assert_eq!(due.monto, Decimal::ZERO);
    assert!(!due.pago);
    assert!(due.fecha_pago.is_none());

    Ok(())
}

/// Tests that a record for an unknown member is rejected by the foreign key.
///
/// Expected: Err reported by the driver as a foreign key violation
#[tokio::test]
async fn rejects_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DueRepository::new(db).create(424242, 7, 2024).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a second record for the same member and period is rejected.
///
/// Expected: Err reported by the driver as a unique violation
#[tokio::test]
async fn rejects_duplicate_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dues_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::socio::create_member(db).await?;
    let repo = DueRepository::new(db);
    repo.create(member.nro_socio, 7, 2024).await?;

    let err = repo.create(member.nro_socio, 7, 2024).await.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
