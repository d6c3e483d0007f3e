use uuid::Uuid;

use crate::{
    auth::{
        TokenBundle, TokenService,
        password::{hash_password, verify_against_dummy, verify_password},
    },
    db::entities::user,
    error::AppError,
    services::user_service::{USERNAME_TAKEN_MESSAGE, UserService},
    validation::validate_registration,
};

pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect username or password";
const INVALID_CREDENTIALS_MESSAGE: &str = "Could not validate credentials";

/// Registration, login and bearer-token resolution.
#[derive(Clone)]
pub struct AuthService<'a> {
    users: UserService,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(users: UserService, tokens: &'a TokenService) -> Self {
        Self { users, tokens }
    }

    /// Password policy is checked before the store is touched. The lookup
    /// below is only a fast path; the unique index has the final say.
    pub async fn register(&self, username: &str, password: &str) -> Result<user::Model, AppError> {
        let registration = validate_registration(username, password)?;

        if self
            .users
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request(USERNAME_TAKEN_MESSAGE));
        }

        let password_hash = hash_password(&registration.password)?;
        let user = self
            .users
            .create_user(&registration.username, &password_hash)
            .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub async fn verify(&self, username: &str, password: &str) -> Result<user::Model, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            verify_against_dummy(password);
            return Err(AppError::unauthorized(LOGIN_FAILED_MESSAGE));
        };
        if !verify_password(password, &user.password_hash) {
            return Err(AppError::unauthorized(LOGIN_FAILED_MESSAGE));
        }
        Ok(user)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<TokenBundle, AppError> {
        let user = self.verify(username, password).await?;
        let bundle = self.tokens.issue(&user.username)?;
        tracing::debug!(user_id = %user.id, "issued access token");
        Ok(bundle)
    }

    /// Maps a bearer token to its user. A valid token for a deleted account is
    /// rejected the same way as a forged one.
    pub async fn resolve_user(&self, token: &str) -> Result<user::Model, AppError> {
        let username = self.tokens.resolve(token)?;
        self.users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS_MESSAGE))
    }

    pub async fn delete_account(&self, user_id: Uuid) -> Result<(), AppError> {
        let rows = self.users.delete_with_dependents(user_id).await?;
        tracing::info!(
            %user_id,
            projects = rows.projects,
            todos = rows.todos,
            time_entries = rows.time_entries,
            settings = rows.settings,
            "account deleted"
        );
        Ok(())
    }
}
