use std::sync::Arc;

use crate::domain::ports::inbound::{AccessGate, PayrollService, WorkforceService};

/// Shared handles every handler can reach. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub workforce: Arc<dyn WorkforceService>,
    pub payroll: Arc<dyn PayrollService>,
    pub access: Arc<dyn AccessGate>,
}

impl AppState {
    pub fn new(
        workforce: Arc<dyn WorkforceService>,
        payroll: Arc<dyn PayrollService>,
        access: Arc<dyn AccessGate>,
    ) -> Self {
        Self {
            workforce,
            payroll,
            access,
        }
    }
}
