use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::entities::time_entry,
    middleware::CurrentUser,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
    validation::validate_new_time_entry,
};

#[derive(Debug, Deserialize)]
pub struct CreateTimeEntryRequest {
    pub todo_id: Uuid,
    pub duration: i64,
    #[serde(default)]
    pub project_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct TimeEntryResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub todo_id: Uuid,
    pub project_id: Uuid,
    pub duration: i64,
    pub timestamp: DateTime<FixedOffset>,
}

impl From<time_entry::Model> for TimeEntryResponse {
    fn from(model: time_entry::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            todo_id: model.todo_id,
            project_id: model.project_id,
            duration: model.duration,
            timestamp: model.timestamp,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/timeentries", get(list_entries).post(create_entry))
        .with_state(state)
}

async fn list_entries(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> ApiResult<Vec<TimeEntryResponse>> {
    let entries = ServiceContext::from_state(state.as_ref())
        .time_entry()
        .list(current.id())
        .await?;
    JsonApiResponse::ok(entries.into_iter().map(Into::into).collect())
}

async fn create_entry(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    Json(body): Json<CreateTimeEntryRequest>,
) -> ApiResult<TimeEntryResponse> {
    let input = validate_new_time_entry(body.todo_id, body.duration, body.project_id)?;
    let entry = ServiceContext::from_state(state.as_ref())
        .time_entry()
        .create(current.id(), input)
        .await?;
    JsonApiResponse::created(entry.into())
}
