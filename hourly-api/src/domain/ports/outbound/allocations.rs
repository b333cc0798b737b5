use async_trait::async_trait;

use crate::domain::{
    models::{Allocation, AllocationDetails, AllocationId, EntityRef, NewAllocation},
    WorkforceError,
};

/// Outbound port for allocation persistence.
#[async_trait]
pub trait AllocationRepository: Send + Sync + 'static {
    /// All allocations joined with names, newest date first, read in one query.
    async fn list_allocations(&self) -> Result<Vec<AllocationDetails>, WorkforceError>;

    async fn get_allocation(
        &self,
        id: AllocationId,
    ) -> Result<Option<Allocation>, WorkforceError>;

    async fn create_allocation(
        &self,
        allocation: &NewAllocation,
    ) -> Result<Allocation, WorkforceError>;

    async fn update_allocation(
        &self,
        id: AllocationId,
        allocation: &NewAllocation,
    ) -> Result<Option<Allocation>, WorkforceError>;

    async fn delete_allocation(&self, id: AllocationId) -> Result<bool, WorkforceError>;

    /// Number of allocations pointing at `target`.
    async fn count_allocations_referencing(
        &self,
        target: EntityRef,
    ) -> Result<i64, WorkforceError>;
}
