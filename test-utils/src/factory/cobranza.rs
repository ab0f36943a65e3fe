//! Due record factory for creating test `cobranzas` rows.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test due records with customizable fields.
///
/// Defaults to an unpaid record for January 2024 with an amount of zero.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::cobranza::DueFactory;
///
/// let due = DueFactory::new(&db, member.nro_socio)
///     .period(3, 2024)
///     .paid_at(Utc::now())
///     .build()
///     .await?;
/// ```
pub struct DueFactory<'a> {
    db: &'a DatabaseConnection,
    nro_socio: i32,
    mes: i32,
    anio: i32,
    monto: Decimal,
    pago: bool,
    fecha_pago: Option<DateTime<Utc>>,
}

impl<'a> DueFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, nro_socio: i32) -> Self {
        Self {
            db,
            nro_socio,
            mes: 1,
            anio: 2024,
            monto: Decimal::ZERO,
            pago: false,
            fecha_pago: None,
        }
    }

    pub fn period(mut self, mes: i32, anio: i32) -> Self {
        self.mes = mes;
        self.anio = anio;
        self
    }

    pub fn monto(mut self, monto: Decimal) -> Self {
        self.monto = monto;
        self
    }

    /// Marks the record as paid on the given date.
    pub fn paid_at(mut self, fecha_pago: DateTime<Utc>) -> Self {
        self.pago = true;
        self.fecha_pago = Some(fecha_pago);
        self
    }

    /// Builds and inserts the due record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::cobranza::Model)` - Created due record
    /// - `Err(DbErr)` - Database error during insert (missing member, duplicate period)
    pub async fn build(self) -> Result<entity::cobranza::Model, DbErr> {
        entity::cobranza::ActiveModel {
            nro_socio: ActiveValue::Set(self.nro_socio),
            mes: ActiveValue::Set(self.mes),
            anio: ActiveValue::Set(self.anio),
            monto: ActiveValue::Set(self.monto),
            pago: ActiveValue::Set(self.pago),
            fecha_pago: ActiveValue::Set(self.fecha_pago),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unpaid, zero-amount due record for the given member and period.
pub async fn create_due(
    db: &DatabaseConnection,
    nro_socio: i32,
    mes: i32,
    anio: i32,
) -> Result<entity::cobranza::Model, DbErr> {
    DueFactory::new(db, nro_socio).period(mes, anio).build().await
}
