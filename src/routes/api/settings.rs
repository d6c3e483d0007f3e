use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::entities::pomodoro_settings,
    middleware::CurrentUser,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
    validation::validate_settings_patch,
};

#[derive(Debug, Default, Deserialize)]
pub struct SettingsRequest {
    pub focus_duration: Option<i32>,
    pub break_duration: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub focus_duration: i32,
    pub break_duration: i32,
}

impl From<pomodoro_settings::Model> for SettingsResponse {
    fn from(model: pomodoro_settings::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            focus_duration: model.focus_duration,
            break_duration: model.break_duration,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/settings", get(get_settings).put(put_settings))
        .with_state(state)
}

async fn get_settings(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> ApiResult<SettingsResponse> {
    let settings = ServiceContext::from_state(state.as_ref())
        .settings()
        .get(current.id())
        .await?;
    JsonApiResponse::ok(settings.into())
}

async fn put_settings(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    Json(body): Json<SettingsRequest>,
) -> ApiResult<SettingsResponse> {
    let patch = validate_settings_patch(body.focus_duration, body.break_duration)?;
    let settings = ServiceContext::from_state(state.as_ref())
        .settings()
        .put(current.id(), patch)
        .await?;
    JsonApiResponse::ok(settings.into())
}
