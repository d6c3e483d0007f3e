use uuid::Uuid;

use crate::{
    db::dao::{DaoLayerError, DeletedRows, UserDao},
    db::entities::user,
    error::AppError,
};

pub const USERNAME_TAKEN_MESSAGE: &str = "Username already registered";

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
}

impl UserService {
    pub fn new(user_dao: UserDao) -> Self {
        Self { user_dao }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_by_username(username).await?)
    }

    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<user::Model, AppError> {
        match self.user_dao.create_user(username, password_hash).await {
            Ok(model) => Ok(model),
            Err(DaoLayerError::Conflict { .. }) => Err(AppError::bad_request(USERNAME_TAKEN_MESSAGE)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete_with_dependents(&self, user_id: Uuid) -> Result<DeletedRows, AppError> {
        match self.user_dao.delete_with_dependents(user_id).await {
            Ok(rows) => Ok(rows),
            Err(DaoLayerError::NotFound { .. }) => Err(AppError::not_found("User not found")),
            Err(err) => Err(err.into()),
        }
    }
}
