use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::{
    db::entities::user, error::AppError, services::ServiceContext, state::AppState,
};

const MISSING_TOKEN_MESSAGE: &str = "Not authenticated";

/// The authenticated user behind the request's bearer token.
///
/// Extraction fails with 401 before the handler body runs, so no repository
/// call is made for an unauthenticated request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub user::Model);

impl CurrentUser {
    pub fn id(&self) -> uuid::Uuid {
        self.0.id
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>().cloned() {
            return Ok(user);
        }

        let token =
            bearer_token(parts).ok_or_else(|| AppError::unauthorized(MISSING_TOKEN_MESSAGE))?;
        let user = ServiceContext::from_state(state.as_ref())
            .auth(&state.tokens)
            .resolve_user(token)
            .await?;

        let current = CurrentUser(user);
        parts.extensions.insert(current.clone());
        Ok(current)
    }
}
