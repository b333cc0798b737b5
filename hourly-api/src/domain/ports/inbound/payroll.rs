use async_trait::async_trait;

use crate::domain::{
    models::{AuthContext, PayrollReport},
    PayPeriod, WorkforceError,
};

/// Inbound port for payroll reporting.
#[async_trait]
pub trait PayrollService: Send + Sync + 'static {
    /// Hours worked and pay owed per employee for one month. Admin only.
    async fn monthly_report(
        &self,
        ctx: &AuthContext,
        period: PayPeriod,
    ) -> Result<PayrollReport, WorkforceError>;
}
