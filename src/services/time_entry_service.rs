use uuid::Uuid;

use crate::{
    db::dao::{TimeEntryDao, TodoDao},
    db::entities::time_entry,
    error::AppError,
    services::todo_service::TODO_NOT_FOUND,
    validation::NewTimeEntry,
};

pub const PROJECT_MISMATCH_MESSAGE: &str = "project_id does not match the todo's project";

#[derive(Clone)]
pub struct TimeEntryService {
    entry_dao: TimeEntryDao,
    todo_dao: TodoDao,
}

impl TimeEntryService {
    pub fn new(entry_dao: TimeEntryDao, todo_dao: TodoDao) -> Self {
        Self {
            entry_dao,
            todo_dao,
        }
    }

    /// The stored project is always the todo's; a client-supplied one must agree.
    pub async fn create(
        &self,
        user_id: Uuid,
        input: NewTimeEntry,
    ) -> Result<time_entry::Model, AppError> {
        let todo = self
            .todo_dao
            .find_owned(user_id, input.todo_id)
            .await?
            .ok_or_else(|| AppError::not_found(TODO_NOT_FOUND))?;

        if input
            .project_id
            .is_some_and(|project_id| project_id != todo.project_id)
        {
            return Err(AppError::bad_request(PROJECT_MISMATCH_MESSAGE));
        }

        Ok(self
            .entry_dao
            .record(user_id, todo.id, todo.project_id, input.duration)
            .await?)
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<time_entry::Model>, AppError> {
        Ok(self.entry_dao.list_for_user(user_id).await?)
    }
}
