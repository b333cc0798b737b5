use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{MessageResponse, TimeLogDetailsResponse, TimeLogResponse},
    app_state::AppState,
    auth::AuthUser,
    domain::{
        models::{EmployeeId, NewTimeLog, TimeLogFilter, TimeLogId},
        parse_clock_time, parse_date, PayPeriod, PeriodError,
    },
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_time_logs).post(create_time_log))
        .route(
            "/:id",
            get(get_time_log)
                .put(update_time_log)
                .delete(delete_time_log),
        )
}

#[derive(Debug, Deserialize)]
pub struct TimeLogQuery {
    employee_id: Option<i32>,
    /// `YYYY-MM`.
    month: Option<String>,
}

impl TryFrom<TimeLogQuery> for TimeLogFilter {
    type Error = PeriodError;

    fn try_from(query: TimeLogQuery) -> Result<Self, Self::Error> {
        let period = query
            .month
            .as_deref()
            .map(str::parse::<PayPeriod>)
            .transpose()?;

        Ok(TimeLogFilter {
            employee_id: query.employee_id.map(EmployeeId::new),
            period,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TimeLogPayload {
    employee_id: i32,
    project_id: i32,
    task_id: i32,
    /// `YYYY-MM-DD`.
    date: String,
    /// `HH:MM`.
    start_time: String,
    /// `HH:MM`.
    end_time: String,
}

impl TryFrom<TimeLogPayload> for NewTimeLog {
    type Error = PeriodError;

    fn try_from(payload: TimeLogPayload) -> Result<Self, Self::Error> {
        Ok(NewTimeLog {
            employee_id: payload.employee_id.into(),
            project_id: payload.project_id.into(),
            task_id: payload.task_id.into(),
            date: parse_date(&payload.date)?,
            start_time: parse_clock_time(&payload.start_time)?,
            end_time: parse_clock_time(&payload.end_time)?,
        })
    }
}

#[instrument(name = "GET /time_logs", skip(app_state))]
async fn list_time_logs(
    State(app_state): State<AppState>,
    Query(query): Query<TimeLogQuery>,
) -> Result<Json<Vec<TimeLogDetailsResponse>>, ApiError> {
    let logs = app_state
        .workforce
        .list_time_logs(query.try_into()?)
        .await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

#[instrument(name = "GET /time_logs/:id", skip(app_state))]
async fn get_time_log(
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<TimeLogResponse>, ApiError> {
    let log = app_state.workforce.get_time_log(TimeLogId::new(id)).await?;
    Ok(Json(log.into()))
}

#[instrument(name = "POST /time_logs", skip(app_state))]
async fn create_time_log(
    user: AuthUser,
    State(app_state): State<AppState>,
    Json(payload): Json<TimeLogPayload>,
) -> Result<Json<TimeLogResponse>, ApiError> {
    let log = app_state
        .workforce
        .create_time_log(&user.context(), payload.try_into()?)
        .await?;
    Ok(Json(log.into()))
}

#[instrument(name = "PUT /time_logs/:id", skip(app_state))]
async fn update_time_log(
    user: AuthUser,
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
    Json(payload): Json<TimeLogPayload>,
) -> Result<Json<TimeLogResponse>, ApiError> {
    let log = app_state
        .workforce
        .update_time_log(&user.context(), TimeLogId::new(id), payload.try_into()?)
        .await?;
    Ok(Json(log.into()))
}

#[instrument(name = "DELETE /time_logs/:id", skip(app_state))]
async fn delete_time_log(
    user: AuthUser,
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state
        .workforce
        .delete_time_log(&user.context(), TimeLogId::new(id))
        .await?;
    Ok(Json(MessageResponse::new("Time log deleted")))
}
