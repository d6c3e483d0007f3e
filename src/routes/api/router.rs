use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{auth, projects, settings, stats, time_entries, todos};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/auth", auth::router(state.clone()))
        .merge(projects::router(state.clone()))
        .merge(todos::router(state.clone()))
        .merge(time_entries::router(state.clone()))
        .merge(settings::router(state.clone()))
        .merge(stats::router(state))
}
