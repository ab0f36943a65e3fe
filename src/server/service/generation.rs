//! Recurring charge generation.
//!
//! Creates the missing monthly due records of each member's billing cycle group. Existing
//! records are never modified, so running the same generation twice creates nothing the
//! second time.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{cobranza::DueRepository, socio::MemberRepository},
    error::{constraint::ConstraintError, AppError},
    model::{
        billing::months_to_generate,
        cobranza::{DueRecord, GenerateDuesParams, GeneratedDues},
        socio::Member,
    },
};

pub struct ChargeGenerationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChargeGenerationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates missing due records for one member or for every member.
    ///
    /// With a member number only that member is processed and a missing member is reported
    /// as a foreign key violation. Without one, every member is processed in member number
    /// order and members with an unrecognised plan are skipped with a warning. The whole run
    /// is one transaction.
    ///
    /// # Arguments
    /// - `params` - Member, period and year to generate for
    /// - `today` - Reference date used when no period is given
    ///
    /// # Returns
    /// - `Ok(GeneratedDues)` - The records created by this run, possibly none
    /// - `Err(AppError::ConstraintErr)` - The requested member does not exist
    /// - `Err(AppError::InternalErr)` - The requested member has an unrecognised plan
    pub async fn generate(
        &self,
        params: GenerateDuesParams,
        today: NaiveDate,
    ) -> Result<GeneratedDues, AppError> {
        let txn = self.db.begin().await?;
        let member_repo = MemberRepository::new(&txn);

        let members = match params.member_number {
            Some(number) => {
                let member = member_repo.find_by_number(number).await?.ok_or_else(|| {
                    ConstraintError::ForeignKey(format!("member {} does not exist", number))
                })?;

                vec![Member::from_entity(member)?]
            }
            None => member_repo
                .get_all()
                .await?
                .into_iter()
                .filter_map(|member| match Member::from_entity(member) {
                    Ok(member) => Some(member),
                    Err(e) => {
                        tracing::warn!("Skipping charge generation: {}", e);
                        None
                    }
                })
                .collect(),
        };

        let mut generated = GeneratedDues::default();
        for member in &members {
            let created = generate_for_member(&txn, member, &params, today).await?;
            generated.created.extend(created);
        }

        txn.commit().await?;

        tracing::debug!(
            "Generated {} due record(s) for {} member(s) in {}",
            generated.months_processed(),
            members.len(),
            params.year
        );

        Ok(generated)
    }
}

/// Inserts the months of the member's group that have no record yet.
async fn generate_for_member<C: ConnectionTrait>(
    db: &C,
    member: &Member,
    params: &GenerateDuesParams,
    today: NaiveDate,
) -> Result<Vec<DueRecord>, AppError> {
    let repo = DueRepository::new(db);
    let range = months_to_generate(member.plan, params.period, today);

    let existing = repo
        .get_existing_months(member.number, params.year, range)
        .await?;

    let mut created = Vec::with_capacity(range.len() - existing.len().min(range.len()));
    for month in range.months().filter(|m| !existing.contains(m)) {
        let due = repo.create(member.number, month, params.year).await?;
        created.push(DueRecord::from_entity(due));
    }

    Ok(created)
}
