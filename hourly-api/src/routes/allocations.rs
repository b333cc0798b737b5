use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{AllocationDetailsResponse, AllocationResponse, MessageResponse},
    app_state::AppState,
    auth::AuthUser,
    domain::{
        models::{AllocationId, AllocationStatus, NewAllocation},
        parse_date, PeriodError,
    },
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_allocations).post(create_allocation))
        .route(
            "/:id",
            get(get_allocation)
                .put(update_allocation)
                .delete(delete_allocation),
        )
}

#[derive(Debug, Deserialize)]
pub struct AllocationPayload {
    employee_id: i32,
    project_id: i32,
    task_id: i32,
    allocated_hours: f64,
    /// `YYYY-MM-DD`.
    date: String,
    #[serde(default)]
    status: AllocationStatus,
}

impl TryFrom<AllocationPayload> for NewAllocation {
    type Error = PeriodError;

    fn try_from(payload: AllocationPayload) -> Result<Self, Self::Error> {
        Ok(NewAllocation {
            employee_id: payload.employee_id.into(),
            project_id: payload.project_id.into(),
            task_id: payload.task_id.into(),
            allocated_hours: payload.allocated_hours,
            date: parse_date(&payload.date)?,
            status: payload.status,
        })
    }
}

#[instrument(name = "GET /allocations", skip(app_state))]
async fn list_allocations(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<AllocationDetailsResponse>>, ApiError> {
    let allocations = app_state.workforce.list_allocations().await?;
    Ok(Json(allocations.into_iter().map(Into::into).collect()))
}

#[instrument(name = "GET /allocations/:id", skip(app_state))]
async fn get_allocation(
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<AllocationResponse>, ApiError> {
    let allocation = app_state
        .workforce
        .get_allocation(AllocationId::new(id))
        .await?;
    Ok(Json(allocation.into()))
}

#[instrument(name = "POST /allocations", skip(app_state))]
async fn create_allocation(
    user: AuthUser,
    State(app_state): State<AppState>,
    Json(payload): Json<AllocationPayload>,
) -> Result<Json<AllocationResponse>, ApiError> {
    let allocation = app_state
        .workforce
        .create_allocation(&user.context(), payload.try_into()?)
        .await?;
    Ok(Json(allocation.into()))
}

#[instrument(name = "PUT /allocations/:id", skip(app_state))]
async fn update_allocation(
    user: AuthUser,
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
    Json(payload): Json<AllocationPayload>,
) -> Result<Json<AllocationResponse>, ApiError> {
    let allocation = app_state
        .workforce
        .update_allocation(&user.context(), AllocationId::new(id), payload.try_into()?)
        .await?;
    Ok(Json(allocation.into()))
}

#[instrument(name = "DELETE /allocations/:id", skip(app_state))]
async fn delete_allocation(
    user: AuthUser,
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state
        .workforce
        .delete_allocation(&user.context(), AllocationId::new(id))
        .await?;
    Ok(Json(MessageResponse::new("Allocation deleted")))
}
