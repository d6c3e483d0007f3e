use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::TokenBundle,
    db::entities::user,
    middleware::CurrentUser,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of a user; the password hash never leaves the service.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            created_at: model.created_at,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me).delete(delete_me))
        .with_state(state)
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<UserResponse> {
    let services = ServiceContext::from_state(state.as_ref());
    let user = services
        .auth(&state.tokens)
        .register(&body.username, &body.password)
        .await?;
    JsonApiResponse::created(user.into())
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<TokenBundle> {
    let services = ServiceContext::from_state(state.as_ref());
    let tokens = services
        .auth(&state.tokens)
        .login(&body.username, &body.password)
        .await?;
    JsonApiResponse::ok(tokens)
}

async fn me(CurrentUser(user): CurrentUser) -> ApiResult<UserResponse> {
    JsonApiResponse::ok(user.into())
}

async fn delete_me(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> ApiResult<serde_json::Value> {
    let services = ServiceContext::from_state(state.as_ref());
    services.auth(&state.tokens).delete_account(current.id()).await?;
    JsonApiResponse::with_status(
        axum::http::StatusCode::OK,
        "Account deleted successfully",
        serde_json::Value::Null,
    )
}
