use uuid::Uuid;

use crate::{
    db::dao::ProjectDao,
    db::entities::project,
    error::AppError,
    validation::{NewProject, ProjectPatch},
};

pub const PROJECT_NOT_FOUND: &str = "Project not found";

#[derive(Clone)]
pub struct ProjectService {
    project_dao: ProjectDao,
}

impl ProjectService {
    pub fn new(project_dao: ProjectDao) -> Self {
        Self { project_dao }
    }

    pub async fn create(&self, user_id: Uuid, input: NewProject) -> Result<project::Model, AppError> {
        Ok(self
            .project_dao
            .create_for_user(user_id, &input.name, &input.color)
            .await?)
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<project::Model>, AppError> {
        Ok(self.project_dao.list_for_user(user_id).await?)
    }

    /// Absent and foreign projects are indistinguishable to the caller.
    pub async fn require_owned(&self, user_id: Uuid, id: Uuid) -> Result<project::Model, AppError> {
        self.project_dao
            .find_owned(user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(PROJECT_NOT_FOUND))
    }

    pub async fn patch(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: ProjectPatch,
    ) -> Result<project::Model, AppError> {
        if patch.is_empty() {
            return self.require_owned(user_id, id).await;
        }
        self.project_dao
            .update_owned(user_id, id, patch.name, patch.color, patch.is_completed)
            .await?
            .ok_or_else(|| AppError::not_found(PROJECT_NOT_FOUND))
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let rows = self
            .project_dao
            .delete_with_dependents(user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(PROJECT_NOT_FOUND))?;
        tracing::info!(
            %user_id,
            project_id = %id,
            todos = rows.todos,
            time_entries = rows.time_entries,
            "project deleted"
        );
        Ok(())
    }
}
