use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

use super::project_dao::owned_project_ids;
use super::{DaoBase, DaoResult, DeletedRows};
use crate::db::entities::prelude::{TimeEntry, Todo};
use crate::db::entities::{TodoStatus, time_entry, todo};

#[derive(Clone)]
pub struct TodoDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoDao {
    type Entity = Todo;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoDao {
    /// The caller has already checked that `project_id` belongs to the user.
    pub async fn create_in_project(&self, project_id: Uuid, title: &str) -> DaoResult<todo::Model> {
        let model = todo::ActiveModel {
            project_id: Set(project_id),
            title: Set(title.to_string()),
            status: Set(TodoStatus::default().as_str().to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> DaoResult<Vec<todo::Model>> {
        self.find_iter(None, None, move |query| {
            query.filter(todo::Column::ProjectId.in_subquery(owned_project_ids(user_id)))
        })
        .collect_all()
        .await
    }

    pub async fn find_owned(&self, user_id: Uuid, id: Uuid) -> DaoResult<Option<todo::Model>> {
        self.find_one(move |query| {
            query
                .filter(todo::Column::Id.eq(id))
                .filter(todo::Column::ProjectId.in_subquery(owned_project_ids(user_id)))
        })
        .await
    }

    pub async fn update_owned(
        &self,
        user_id: Uuid,
        id: Uuid,
        title: Option<String>,
        status: Option<TodoStatus>,
    ) -> DaoResult<Option<todo::Model>> {
        let Some(_) = self.find_owned(user_id, id).await? else {
            return Ok(None);
        };
        let model = self
            .update(id, move |active| {
                if let Some(title) = title {
                    active.title = Set(title);
                }
                if let Some(status) = status {
                    active.status = Set(status.as_str().to_string());
                }
            })
            .await?;
        Ok(Some(model))
    }

    /// Deletes the todo and its time entries in one transaction. `None` when
    /// the todo is not reachable from the user's projects.
    pub async fn delete_with_dependents(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> DaoResult<Option<DeletedRows>> {
        let txn = self.db.begin().await?;

        let owned = Todo::find_by_id(id)
            .filter(todo::Column::ProjectId.in_subquery(owned_project_ids(user_id)))
            .one(&txn)
            .await?;
        if owned.is_none() {
            return Ok(None);
        }

        let time_entries = TimeEntry::delete_many()
            .filter(time_entry::Column::TodoId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        let todos = Todo::delete_by_id(id).exec(&txn).await?.rows_affected;

        txn.commit().await?;
        Ok(Some(DeletedRows {
            todos,
            time_entries,
            ..Default::default()
        }))
    }
}
