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

use crate::{
    db::entities::project,
    middleware::CurrentUser,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
    validation::{validate_new_project, validate_project_patch},
};

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchProjectRequest {
    pub name: Option<String>,
    pub color: Option<String>,
    pub is_completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub color: String,
    pub is_completed: bool,
    pub created_at: DateTime<FixedOffset>,
}

impl From<project::Model> for ProjectResponse {
    fn from(model: project::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            color: model.color,
            is_completed: model.is_completed,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: Uuid,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/{id}", patch(patch_project).delete(delete_project))
        .with_state(state)
}

async fn list_projects(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> ApiResult<Vec<ProjectResponse>> {
    let projects = ServiceContext::from_state(state.as_ref())
        .project()
        .list(current.id())
        .await?;
    JsonApiResponse::ok(projects.into_iter().map(Into::into).collect())
}

async fn create_project(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    Json(body): Json<CreateProjectRequest>,
) -> ApiResult<ProjectResponse> {
    let input = validate_new_project(&body.name, &body.color)?;
    let project = ServiceContext::from_state(state.as_ref())
        .project()
        .create(current.id(), input)
        .await?;
    JsonApiResponse::created(project.into())
}

async fn patch_project(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchProjectRequest>,
) -> ApiResult<ProjectResponse> {
    let patch = validate_project_patch(
        body.name.as_deref(),
        body.color.as_deref(),
        body.is_completed,
    )?;
    let project = ServiceContext::from_state(state.as_ref())
        .project()
        .patch(current.id(), id, patch)
        .await?;
    JsonApiResponse::ok(project.into())
}

async fn delete_project(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<DeletedResponse> {
    ServiceContext::from_state(state.as_ref())
        .project()
        .delete(current.id(), id)
        .await?;
    JsonApiResponse::with_status(
        StatusCode::OK,
        "Project deleted successfully",
        DeletedResponse { id },
    )
}
