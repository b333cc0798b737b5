use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::PayrollReportResponse, app_state::AppState, auth::AuthUser,
    domain::PayPeriod, routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/payroll", get(payroll_report))
}

#[derive(Debug, Deserialize)]
pub struct PayrollQuery {
    /// `YYYY-MM`.
    month: String,
}

#[instrument(name = "GET /reports/payroll", skip(app_state))]
async fn payroll_report(
    user: AuthUser,
    State(app_state): State<AppState>,
    Query(query): Query<PayrollQuery>,
) -> Result<Json<PayrollReportResponse>, ApiError> {
    let period: PayPeriod = query.month.parse()?;
    let report = app_state
        .payroll
        .monthly_report(&user.context(), period)
        .await?;
    Ok(Json(report.into()))
}
