use uuid::Uuid;

use crate::{
    db::dao::{ProjectDao, TodoDao},
    db::entities::{TodoStatus, todo},
    error::AppError,
    services::project_service::PROJECT_NOT_FOUND,
    validation::{NewTodo, TodoPatch},
};

pub const TODO_NOT_FOUND: &str = "Todo not found";

pub fn parse_status(raw: &str) -> Result<TodoStatus, AppError> {
    TodoStatus::try_from(raw).map_err(|_| {
        AppError::bad_request(format!(
            "Invalid status. Must be one of: {}",
            TodoStatus::allowed_values()
        ))
    })
}

#[derive(Clone)]
pub struct TodoService {
    todo_dao: TodoDao,
    project_dao: ProjectDao,
}

impl TodoService {
    pub fn new(todo_dao: TodoDao, project_dao: ProjectDao) -> Self {
        Self {
            todo_dao,
            project_dao,
        }
    }

    pub async fn create(&self, user_id: Uuid, input: NewTodo) -> Result<todo::Model, AppError> {
        if self
            .project_dao
            .find_owned(user_id, input.project_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(PROJECT_NOT_FOUND));
        }
        Ok(self
            .todo_dao
            .create_in_project(input.project_id, &input.title)
            .await?)
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<todo::Model>, AppError> {
        Ok(self.todo_dao.list_for_user(user_id).await?)
    }

    pub async fn require_owned(&self, user_id: Uuid, id: Uuid) -> Result<todo::Model, AppError> {
        self.todo_dao
            .find_owned(user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(TODO_NOT_FOUND))
    }

    /// Reachability is checked first, so an unknown todo is a 404 even when
    /// the status is also bad. A rejected status leaves the row untouched.
    pub async fn patch(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: TodoPatch,
    ) -> Result<todo::Model, AppError> {
        let current = self.require_owned(user_id, id).await?;
        let status = patch.status.as_deref().map(parse_status).transpose()?;

        if patch.title.is_none() && status.is_none() {
            return Ok(current);
        }
        self.todo_dao
            .update_owned(user_id, id, patch.title, status)
            .await?
            .ok_or_else(|| AppError::not_found(TODO_NOT_FOUND))
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let rows = self
            .todo_dao
            .delete_with_dependents(user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(TODO_NOT_FOUND))?;
        tracing::info!(
            %user_id,
            todo_id = %id,
            time_entries = rows.time_entries,
            "todo deleted"
        );
        Ok(())
    }
}
