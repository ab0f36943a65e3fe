//! Monthly closing: automatic generation of the current month's dues.
//!
//! The tick job calls [`MonthlyClosing::tick`] every few minutes and the reset job calls
//! [`MonthlyClosing::reset`] at the start of each month. Generation runs at most once per
//! calendar month; a failed run leaves the state `Idle` so the next tick retries.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::server::{
    error::AppError,
    model::cobranza::{GenerateDuesParams, GeneratedDues},
    service::generation::ChargeGenerationService,
};

/// Source of the monthly charge generation run.
#[async_trait]
pub trait ChargeGenerator: Send + Sync {
    /// Generates the dues of the billing groups containing `today` for every member.
    async fn generate_month(&self, today: NaiveDate) -> Result<GeneratedDues, AppError>;
}

/// Charge generator backed by the database.
pub struct DatabaseChargeGenerator {
    db: DatabaseConnection,
}

impl DatabaseChargeGenerator {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChargeGenerator for DatabaseChargeGenerator {
    async fn generate_month(&self, today: NaiveDate) -> Result<GeneratedDues, AppError> {
        ChargeGenerationService::new(&self.db)
            .generate(GenerateDuesParams::monthly_closing(today), today)
            .await
    }
}

/// Whether this month's generation has already run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosingState {
    #[default]
    Idle,
    FiredThisMonth { year: i32, month: u32 },
}

impl ClosingState {
    fn has_fired_for(&self, today: NaiveDate) -> bool {
        match *self {
            Self::Idle => false,
            Self::FiredThisMonth { year, month } => year == today.year() && month == today.month(),
        }
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Generation ran and created this many records.
    Generated(u64),
    /// Generation already ran this month; nothing was done.
    AlreadyFired,
    /// Generation failed; the state stays `Idle`.
    Failed,
}

/// Monthly closing state machine shared by the scheduler's jobs.
pub struct MonthlyClosing<G: ChargeGenerator> {
    generator: Arc<G>,
    state: Arc<RwLock<ClosingState>>,
}

impl<G: ChargeGenerator> Clone for MonthlyClosing<G> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            state: self.state.clone(),
        }
    }
}

impl<G: ChargeGenerator> MonthlyClosing<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator: Arc::new(generator),
            state: Arc::new(RwLock::new(ClosingState::Idle)),
        }
    }

    /// Runs the generation for `today` unless it already ran this calendar month.
    ///
    /// A state left over from a previous month counts as `Idle`, which covers a missed
    /// reset. The state lock is held for the whole run so overlapping ticks cannot both
    /// generate.
    pub async fn tick(&self, today: NaiveDate) -> TickOutcome {
        let mut state = self.state.write().await;

        if state.has_fired_for(today) {
            tracing::debug!(
                "Monthly closing already ran for {}-{:02}, skipping",
                today.year(),
                today.month()
            );
            return TickOutcome::AlreadyFired;
        }

        match self.generator.generate_month(today).await {
            Ok(generated) => {
                *state = ClosingState::FiredThisMonth {
                    year: today.year(),
                    month: today.month(),
                };

                tracing::info!(
                    "Monthly closing for {}-{:02} generated {} due record(s)",
                    today.year(),
                    today.month(),
                    generated.months_processed()
                );

                TickOutcome::Generated(generated.months_processed())
            }
            Err(e) => {
                *state = ClosingState::Idle;
                tracing::error!("Monthly closing failed, retrying on next tick: {}", e);

                TickOutcome::Failed
            }
        }
    }

    /// Clears a guard left by an earlier month so the next tick generates again.
    ///
    /// A guard already set for the month of `today` is kept.
    pub async fn reset(&self, today: NaiveDate) {
        let mut state = self.state.write().await;

        match *state {
            ClosingState::Idle => {}
            current if current.has_fired_for(today) => {
                tracing::debug!("Monthly closing already ran this month, keeping guard");
            }
            _ => {
                tracing::info!("Monthly closing guard reset");
                *state = ClosingState::Idle;
            }
        }
    }

    #[cfg(test)]
    pub async fn state(&self) -> ClosingState {
        *self.state.read().await
    }
}
