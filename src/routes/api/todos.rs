use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::projects::DeletedResponse;
use crate::{
    db::entities::todo,
    middleware::CurrentUser,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
    validation::{validate_new_todo, validate_todo_patch},
};

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub project_id: Uuid,
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchTodoRequest {
    pub title: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub status: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<todo::Model> for TodoResponse {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            title: model.title,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(patch_todo).delete(delete_todo))
        .with_state(state)
}

async fn list_todos(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> ApiResult<Vec<TodoResponse>> {
    let todos = ServiceContext::from_state(state.as_ref())
        .todo()
        .list(current.id())
        .await?;
    JsonApiResponse::ok(todos.into_iter().map(Into::into).collect())
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    Json(body): Json<CreateTodoRequest>,
) -> ApiResult<TodoResponse> {
    let input = validate_new_todo(body.project_id, &body.title)?;
    let todo = ServiceContext::from_state(state.as_ref())
        .todo()
        .create(current.id(), input)
        .await?;
    JsonApiResponse::created(todo.into())
}

async fn patch_todo(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchTodoRequest>,
) -> ApiResult<TodoResponse> {
    let patch = validate_todo_patch(body.title.as_deref(), body.status.as_deref())?;
    let todo = ServiceContext::from_state(state.as_ref())
        .todo()
        .patch(current.id(), id, patch)
        .await?;
    JsonApiResponse::ok(todo.into())
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<DeletedResponse> {
    ServiceContext::from_state(state.as_ref())
        .todo()
        .delete(current.id(), id)
        .await?;
    JsonApiResponse::with_status(
        StatusCode::OK,
        "Todo deleted successfully",
        DeletedResponse { id },
    )
}
