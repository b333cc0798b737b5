//! Composition root: the only place that pairs services with a concrete store.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    adapters::outbound::PgEntityStore,
    app_state::AppState,
    domain::{
        ports::outbound::EntityStore,
        services::{AccessGateImpl, PayrollServiceImpl, WorkforceServiceImpl},
    },
};

/// Wire every inbound service to `store`.
pub fn app_state<S: EntityStore>(store: Arc<S>) -> AppState {
    AppState::new(
        Arc::new(WorkforceServiceImpl::new(store.clone())),
        Arc::new(PayrollServiceImpl::new(store.clone())),
        Arc::new(AccessGateImpl::new(store)),
    )
}

pub fn postgres_app_state(pool: PgPool) -> AppState {
    app_state(Arc::new(PgEntityStore::new(pool)))
}
