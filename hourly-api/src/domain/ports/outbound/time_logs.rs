use async_trait::async_trait;

use crate::domain::{
    models::{EntityRef, NewTimeLog, TimeLog, TimeLogDetails, TimeLogFilter, TimeLogId},
    WorkforceError,
};

/// Outbound port for time log persistence.
#[async_trait]
pub trait TimeLogRepository: Send + Sync + 'static {
    /// Matching time logs joined with names and hourly rate, newest date
    /// first, read in one query.
    async fn list_time_logs(
        &self,
        filter: &TimeLogFilter,
    ) -> Result<Vec<TimeLogDetails>, WorkforceError>;

    async fn get_time_log(&self, id: TimeLogId) -> Result<Option<TimeLog>, WorkforceError>;

    async fn create_time_log(&self, log: &NewTimeLog) -> Result<TimeLog, WorkforceError>;

    async fn update_time_log(
        &self,
        id: TimeLogId,
        log: &NewTimeLog,
    ) -> Result<Option<TimeLog>, WorkforceError>;

    async fn delete_time_log(&self, id: TimeLogId) -> Result<bool, WorkforceError>;

    /// Number of time logs pointing at `target`.
    async fn count_time_logs_referencing(
        &self,
        target: EntityRef,
    ) -> Result<i64, WorkforceError>;
}
