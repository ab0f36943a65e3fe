//! Cron jobs for the monthly closing.

pub mod monthly_closing;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::server::{
    error::AppError,
    scheduler::monthly_closing::{ChargeGenerator, DatabaseChargeGenerator, MonthlyClosing},
};

/// Every two minutes on odd minutes, never at the same instant as the reset.
const TICK_SCHEDULE: &str = "0 1-59/2 * * * *";
/// Midnight UTC on the first day of each month.
const RESET_SCHEDULE: &str = "0 0 0 1 * *";

/// Starts the monthly closing scheduler
///
/// Two jobs share one [`MonthlyClosing`] guard:
/// - the tick job generates the current month's dues for every member, at most once per month
/// - the reset job clears the previous month's guard when a new month starts
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let closing = MonthlyClosing::new(DatabaseChargeGenerator::new(db));

    let (tick_job, reset_job) = closing_jobs(closing)?;

    scheduler.add(tick_job).await?;
    scheduler.add(reset_job).await?;
    scheduler.start().await?;

    tracing::info!("Monthly closing scheduler started");

    Ok(())
}

/// Builds the tick and reset jobs around a shared guard.
fn closing_jobs<G: ChargeGenerator + 'static>(
    closing: MonthlyClosing<G>,
) -> Result<(Job, Job), JobSchedulerError> {
    let tick_closing = closing.clone();
    let tick_job = Job::new_async(TICK_SCHEDULE, move |_uuid, _lock| {
        let closing = tick_closing.clone();

        Box::pin(async move {
            let today = Utc::now().date_naive();
            tracing::debug!("Monthly closing tick for {}", today);
            closing.tick(today).await;
        })
    })?;

    let reset_closing = closing;
    let reset_job = Job::new_async(RESET_SCHEDULE, move |_uuid, _lock| {
        let closing = reset_closing.clone();

        Box::pin(async move {
            closing.reset(Utc::now().date_naive()).await;
        })
    })?;

    Ok((tick_job, reset_job))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::server::model::cobranza::GeneratedDues;

    struct NoopGenerator;

    #[async_trait]
    impl ChargeGenerator for NoopGenerator {
        async fn generate_month(&self, _today: NaiveDate) -> Result<GeneratedDues, AppError> {
            Ok(GeneratedDues::default())
        }
    }

    /// Tests that both cron expressions are accepted by the scheduler.
    ///
    /// Expected: Ok with two distinct jobs
    #[tokio::test]
    async fn builds_tick_and_reset_jobs() {
        let (tick_job, reset_job) = closing_jobs(MonthlyClosing::new(NoopGenerator)).unwrap();

        assert_ne!(tick_job.guid(), reset_job.guid());
    }

    /// Tests that the tick never shares a minute with the midnight reset.
    ///
    /// Expected: the tick's minute field starts at 1 with a step of 2
    #[test]
    fn tick_runs_on_odd_minutes_only() {
        let fields: Vec<&str> = TICK_SCHEDULE.split_whitespace().collect();
        let reset_fields: Vec<&str> = RESET_SCHEDULE.split_whitespace().collect();

        assert_eq!(fields[1], "1-59/2");
        assert_eq!(reset_fields[1], "0");
    }
}
