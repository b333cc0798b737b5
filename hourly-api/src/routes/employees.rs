use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{EmployeeResponse, MessageResponse},
    app_state::AppState,
    auth::AuthUser,
    domain::models::{EmployeeId, EmployeeInput},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}

#[derive(Deserialize)]
pub struct EmployeePayload {
    name: String,
    hourly_rate: Option<f64>,
    email: Option<String>,
    /// Omitted on update to keep the current password.
    password: Option<String>,
}

impl From<EmployeePayload> for EmployeeInput {
    fn from(payload: EmployeePayload) -> Self {
        EmployeeInput {
            name: payload.name,
            hourly_rate: payload.hourly_rate,
            email: payload.email,
            password: payload.password,
        }
    }
}

#[instrument(name = "GET /employees", skip(app_state))]
async fn list_employees(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = app_state.workforce.list_employees().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

#[instrument(name = "GET /employees/:id", skip(app_state))]
async fn get_employee(
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = app_state.workforce.get_employee(EmployeeId::new(id)).await?;
    Ok(Json(employee.into()))
}

#[instrument(name = "POST /employees", skip(app_state, payload))]
async fn create_employee(
    user: AuthUser,
    State(app_state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = app_state
        .workforce
        .create_employee(&user.context(), payload.into())
        .await?;
    Ok(Json(employee.into()))
}

#[instrument(name = "PUT /employees/:id", skip(app_state, payload))]
async fn update_employee(
    user: AuthUser,
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = app_state
        .workforce
        .update_employee(&user.context(), EmployeeId::new(id), payload.into())
        .await?;
    Ok(Json(employee.into()))
}

#[instrument(name = "DELETE /employees/:id", skip(app_state))]
async fn delete_employee(
    user: AuthUser,
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state
        .workforce
        .delete_employee(&user.context(), EmployeeId::new(id))
        .await?;
    Ok(Json(MessageResponse::new("Employee deleted")))
}
