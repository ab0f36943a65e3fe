//! Due record listing and payment reconciliation.
//!
//! A payment registered on one due record applies to every record of the same billing
//! cycle group: the month itself for monthly plans, the containing half-year for semestral
//! plans and the whole year for annual plans. The lookup, the group update and the final
//! read run in one transaction.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::cobranza::DueRepository,
    error::{internal::InternalError, AppError},
    model::{
        billing::{resolve_group, Month},
        cobranza::{ApplyPaymentParams, DueRecord, DueWithMember, PaymentUpdate},
    },
};

pub struct DueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists due records joined with member data, newest period first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of records, `None` for all
    pub async fn list(&self, limit: Option<u64>) -> Result<Vec<DueWithMember>, AppError> {
        let rows = DueRepository::new(self.db).get_all_with_member(limit).await?;

        rows.into_iter()
            .map(|(due, member)| DueWithMember::from_entity(due, member))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// Registers a payment on a due record and every record of its billing cycle group.
    ///
    /// The group is resolved from the member's plan and the month of the addressed record.
    /// All records of that member and year whose month falls in the group receive the same
    /// payment flag, payment date and amount. Any error drops the transaction, rolling the
    /// update back.
    ///
    /// # Returns
    /// - `Ok(PaymentUpdate)` - Updated count and the group's records ordered by month
    /// - `Err(AppError::NotFound)` - No due record with the given id
    /// - `Err(AppError::ConstraintErr)` - The store rejected the new values
    /// - `Err(AppError::InternalErr)` - Stored member or month is invalid
    pub async fn apply_payment(&self, params: ApplyPaymentParams) -> Result<PaymentUpdate, AppError> {
        let txn = self.db.begin().await?;
        let repo = DueRepository::new(&txn);

        let Some((due, member)) = repo.find_with_member(params.id).await? else {
            return Err(AppError::NotFound("Cobranza no encontrada".to_string()));
        };
        let record = DueWithMember::from_entity(due, member)?;

        let month = Month::new(record.due.month).ok_or(InternalError::InvalidStoredMonth {
            due_id: record.due.id,
            month: record.due.month,
        })?;
        let range = resolve_group(record.member.plan, month);
        let (payment_date, amount) = params.resolved_values(Utc::now());

        let updated_count = repo
            .update_payment(
                record.member.number,
                record.due.year,
                range,
                params.paid,
                payment_date,
                amount,
            )
            .await?;

        let records = repo
            .get_in_range(record.member.number, record.due.year, range)
            .await?
            .into_iter()
            .map(DueRecord::from_entity)
            .collect();

        txn.commit().await?;

        tracing::info!(
            "Payment on due {} ({} plan) updated {} record(s) for member {} in {} months {}-{}",
            params.id,
            record.member.plan,
            updated_count,
            record.member.number,
            record.due.year,
            range.start,
            range.end
        );

        Ok(PaymentUpdate {
            range,
            updated_count,
            records,
        })
    }
}
