use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{MessageResponse, ProjectResponse},
    app_state::AppState,
    auth::AuthUser,
    domain::models::ProjectId,
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

#[derive(Debug, Deserialize)]
pub struct ProjectPayload {
    name: String,
}

#[instrument(name = "GET /projects", skip(app_state))]
async fn list_projects(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = app_state.workforce.list_projects().await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

#[instrument(name = "GET /projects/:id", skip(app_state))]
async fn get_project(
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = app_state.workforce.get_project(ProjectId::new(id)).await?;
    Ok(Json(project.into()))
}

#[instrument(name = "POST /projects", skip(app_state))]
async fn create_project(
    user: AuthUser,
    State(app_state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = app_state
        .workforce
        .create_project(&user.context(), &payload.name)
        .await?;
    Ok(Json(project.into()))
}

#[instrument(name = "PUT /projects/:id", skip(app_state))]
async fn update_project(
    user: AuthUser,
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = app_state
        .workforce
        .update_project(&user.context(), ProjectId::new(id), &payload.name)
        .await?;
    Ok(Json(project.into()))
}

#[instrument(name = "DELETE /projects/:id", skip(app_state))]
async fn delete_project(
    user: AuthUser,
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state
        .workforce
        .delete_project(&user.context(), ProjectId::new(id))
        .await?;
    Ok(Json(MessageResponse::new("Project deleted")))
}
