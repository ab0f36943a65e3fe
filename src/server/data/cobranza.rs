//! Due record data repository for database operations.
//!
//! This module provides the `DueRepository` for listing, creating and updating rows of the
//! `cobranzas` table. Month ranges are always applied as bound parameters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::billing::MonthRange;

/// Due record joined with its member; the member side is `None` only if the join found no row.
pub type DueWithMemberRow = (entity::cobranza::Model, Option<entity::socio::Model>);

/// Repository providing database operations for due records.
pub struct DueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DueRepository<'a, C> {
    /// Creates a new DueRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets due records joined with their member, newest period first.
    ///
    /// Ordered by year, month and id, all descending.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows, `None` for all rows
    ///
    /// # Returns
    /// - `Ok(Vec<DueWithMemberRow>)` - Joined rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_member(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<DueWithMemberRow>, DbErr> {
        entity::prelude::Cobranza::find()
            .find_also_related(entity::prelude::Socio)
            .order_by_desc(entity::cobranza::Column::Anio)
            .order_by_desc(entity::cobranza::Column::Mes)
            .order_by_desc(entity::cobranza::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Finds a due record by id joined with its member.
    ///
    /// # Returns
    /// - `Ok(Some(DueWithMemberRow))` - Record found
    /// - `Ok(None)` - No record with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_member(&self, id: i32) -> Result<Option<DueWithMemberRow>, DbErr> {
        entity::prelude::Cobranza::find_by_id(id)
            .find_also_related(entity::prelude::Socio)
            .one(self.db)
            .await
    }

    /// Gets a member's due records for one year whose month falls in `range`, by month.
    pub async fn get_in_range(
        &self,
        nro_socio: i32,
        anio: i32,
        range: MonthRange,
    ) -> Result<Vec<entity::cobranza::Model>, DbErr> {
        entity::prelude::Cobranza::find()
            .filter(entity::cobranza::Column::NroSocio.eq(nro_socio))
            .filter(entity::cobranza::Column::Anio.eq(anio))
            .filter(entity::cobranza::Column::Mes.between(range.start, range.end))
            .order_by_asc(entity::cobranza::Column::Mes)
            .all(self.db)
            .await
    }

    /// Gets the months in `range` that already have a due record for the member and year.
    pub async fn get_existing_months(
        &self,
        nro_socio: i32,
        anio: i32,
        range: MonthRange,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Cobranza::find()
            .select_only()
            .column(entity::cobranza::Column::Mes)
            .filter(entity::cobranza::Column::NroSocio.eq(nro_socio))
            .filter(entity::cobranza::Column::Anio.eq(anio))
            .filter(entity::cobranza::Column::Mes.between(range.start, range.end))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Creates an unpaid due record with a zero amount.
    ///
    /// # Returns
    /// - `Ok(entity::cobranza::Model)` - The created record
    /// - `Err(DbErr)` - Database error, including unique and foreign key violations
    pub async fn create(
        &self,
        nro_socio: i32,
        mes: i32,
        anio: i32,
    ) -> Result<entity::cobranza::Model, DbErr> {
        entity::cobranza::ActiveModel {
            nro_socio: ActiveValue::Set(nro_socio),
            mes: ActiveValue::Set(mes),
            anio: ActiveValue::Set(anio),
            monto: ActiveValue::Set(Decimal::ZERO),
            pago: ActiveValue::Set(false),
            fecha_pago: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Sets payment state and amount on every record of a member's year within `range`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(DbErr)` - Database error, including check constraint violations
    pub async fn update_payment(
        &self,
        nro_socio: i32,
        anio: i32,
        range: MonthRange,
        pago: bool,
        fecha_pago: Option<DateTime<Utc>>,
        monto: Decimal,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Cobranza::update_many()
            .col_expr(entity::cobranza::Column::Pago, Expr::value(pago))
            .col_expr(entity::cobranza::Column::FechaPago, Expr::value(fecha_pago))
            .col_expr(entity::cobranza::Column::Monto, Expr::value(monto))
            .filter(entity::cobranza::Column::NroSocio.eq(nro_socio))
            .filter(entity::cobranza::Column::Anio.eq(anio))
            .filter(entity::cobranza::Column::Mes.between(range.start, range.end))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
