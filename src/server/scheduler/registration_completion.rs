use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{auth::token::AccessTokenService, registration::RegistrationService},
};

/// Top of every hour.
const SWEEP_SCHEDULE: &str = "0 0 * * * *";

/// Starts the hourly housekeeping scheduler
///
/// Each run moves registrations whose session date has passed to `completed` and deletes
/// expired access tokens. Failures are logged and the next run proceeds as normal.
///
/// # Arguments
/// - `db`: Database connection
/// - `token_ttl_days`: Lifetime of access tokens, passed through to the token service
pub async fn start_scheduler(db: DatabaseConnection, token_ttl_days: i64) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = sweep(&db, token_ttl_days).await {
                tracing::error!("Error running registration completion sweep: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Registration completion scheduler started");

    Ok(())
}

/// Runs one sweep.
///
/// The token purge runs even if completing registrations failed.
///
/// # Returns
/// - `Ok((completed, purged))` - Registrations completed and tokens deleted
/// - `Err(AppError)` - The first step that failed
async fn sweep(db: &DatabaseConnection, token_ttl_days: i64) -> Result<(u64, u64), AppError> {
    let completed = RegistrationService::new(db).complete_past().await;
    let purged = AccessTokenService::new(db, token_ttl_days)
        .purge_expired()
        .await;

    let (completed, purged) = (completed?, purged?);

    if completed > 0 || purged > 0 {
        tracing::info!(
            "Completed {} past registrations, purged {} expired access tokens",
            completed,
            purged
        );
    }

    Ok((completed, purged))
}
