use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    middleware::CurrentUser,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, stats_service::StatsSummary},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/stats", get(summary))
        .with_state(state)
}

async fn summary(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> ApiResult<StatsSummary> {
    let summary = ServiceContext::from_state(state.as_ref())
        .stats()
        .summary(current.id())
        .await?;
    JsonApiResponse::ok(summary)
}
