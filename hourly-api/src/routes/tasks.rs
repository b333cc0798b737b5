use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{MessageResponse, TaskResponse},
    app_state::AppState,
    auth::AuthUser,
    domain::models::{NewTask, ProjectId, TaskId},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id", get(get_task).put(update_task).delete(delete_task))
}

#[derive(Debug, Deserialize)]
pub struct TaskQuery {
    project_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    project_id: i32,
    name: String,
}

impl From<TaskPayload> for NewTask {
    fn from(payload: TaskPayload) -> Self {
        NewTask {
            project_id: ProjectId::new(payload.project_id),
            name: payload.name,
        }
    }
}

#[instrument(name = "GET /tasks", skip(app_state))]
async fn list_tasks(
    State(app_state): State<AppState>,
    Query(query): Query<TaskQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = app_state
        .workforce
        .list_tasks(query.project_id.map(ProjectId::new))
        .await?;
    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

#[instrument(name = "GET /tasks/:id", skip(app_state))]
async fn get_task(
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = app_state.workforce.get_task(TaskId::new(id)).await?;
    Ok(Json(task.into()))
}

#[instrument(name = "POST /tasks", skip(app_state))]
async fn create_task(
    user: AuthUser,
    State(app_state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = app_state
        .workforce
        .create_task(&user.context(), payload.into())
        .await?;
    Ok(Json(task.into()))
}

#[instrument(name = "PUT /tasks/:id", skip(app_state))]
async fn update_task(
    user: AuthUser,
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = app_state
        .workforce
        .update_task(&user.context(), TaskId::new(id), payload.into())
        .await?;
    Ok(Json(task.into()))
}

#[instrument(name = "DELETE /tasks/:id", skip(app_state))]
async fn delete_task(
    user: AuthUser,
    Path(id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state
        .workforce
        .delete_task(&user.context(), TaskId::new(id))
        .await?;
    Ok(Json(MessageResponse::new("Task deleted")))
}
