//! Periodic retention purge for attendance records.
//!
//! Attendance data is kept for 24 hours and then deleted. The purge runs in
//! the server process on a fixed interval; a failed run is logged and left
//! for the next run to retry, so the horizon is best-effort rather than
//! exact. Comparisons use the server-assigned `created_at` column only, which
//! keeps the cutoff immune to client clock skew.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use common::state::AppState;
use db::models::attendance_record::{Column, Entity};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect};
use std::time::Duration;

/// Records older than this many hours are eligible for deletion.
pub const RETENTION_HORIZON_HOURS: i64 = 24;

/// How often the purge loop wakes up.
pub const PURGE_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Expired rows are deleted in id batches of this size so a single oversized
/// statement can never fail the whole run.
pub const DELETE_CHUNK_SIZE: usize = 500;

/// What a single purge run did.
#[derive(Debug, PartialEq, Eq)]
pub enum PurgeOutcome {
    /// No expired records existed.
    NoOp,
    /// This many rows were deleted.
    Purged(u64),
}

/// Deletes every attendance record whose `created_at` is at or before
/// `now - 24h`. The boundary is inclusive: a record exactly 24 hours old is
/// purged.
pub async fn run_retention_purge(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<PurgeOutcome, DbErr> {
    let cutoff = now - ChronoDuration::hours(RETENTION_HORIZON_HOURS);

    let expired_ids: Vec<i64> = Entity::find()
        .select_only()
        .column(Column::Id)
        .filter(Column::CreatedAt.lte(cutoff))
        .into_tuple()
        .all(db)
        .await?;

    if expired_ids.is_empty() {
        tracing::info!("No old attendance records to delete");
        return Ok(PurgeOutcome::NoOp);
    }

    let mut deleted: u64 = 0;
    for chunk in expired_ids.chunks(DELETE_CHUNK_SIZE) {
        let res = Entity::delete_many()
            .filter(Column::Id.is_in(chunk.iter().copied()))
            .exec(db)
            .await?;
        deleted += res.rows_affected;
    }

    tracing::info!(deleted, "Deleted old attendance records");
    Ok(PurgeOutcome::Purged(deleted))
}

/// Spawns the background purge loop. Runs once per interval for the lifetime
/// of the process; failures are logged and swallowed so the loop never dies.
pub fn spawn_retention_purge(app_state: AppState) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(PURGE_INTERVAL_SECS));
        // Skip the immediate first tick so startup is not a purge trigger.
        interval.tick().await;

        loop {
            interval.tick().await;
            match run_retention_purge(app_state.db(), Utc::now()).await {
                Ok(outcome) => {
                    tracing::debug!(?outcome, "Retention purge run finished");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Retention purge run failed");
                }
            }
        }
    });
}
