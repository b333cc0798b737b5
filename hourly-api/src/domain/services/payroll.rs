use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{AuthContext, PayrollReport, TimeLog, TimeLogFilter},
    payroll::aggregate,
    ports::{inbound::PayrollService, outbound::EntityStore},
    PayPeriod, WorkforceError,
};

/// Implementation of the PayrollService inbound port.
///
/// Loads the roster and the month's logs, then hands both to the pure
/// aggregation in [`crate::domain::payroll`].
pub struct PayrollServiceImpl<S: EntityStore> {
    store: Arc<S>,
}

impl<S: EntityStore> PayrollServiceImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: EntityStore> PayrollService for PayrollServiceImpl<S> {
    async fn monthly_report(
        &self,
        ctx: &AuthContext,
        period: PayPeriod,
    ) -> Result<PayrollReport, WorkforceError> {
        ctx.require_admin()?;

        let employees = self.store.list_employees().await?;
        let logs: Vec<TimeLog> = self
            .store
            .list_time_logs(&TimeLogFilter::for_period(period))
            .await?
            .into_iter()
            .map(|details| details.log)
            .collect();

        tracing::debug!(
            month = %period,
            employees = employees.len(),
            logs = logs.len(),
            "aggregating payroll"
        );

        Ok(aggregate(&logs, &employees, &period))
    }
}
