use sea_orm::sea_query::{Query, SelectStatement};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

use super::{DaoBase, DaoResult, DeletedRows};
use crate::db::entities::prelude::{Project, TimeEntry, Todo};
use crate::db::entities::{project, time_entry, todo};

/// `SELECT id FROM projects WHERE user_id = ?`, the ownership filter shared by
/// every todo query.
pub(crate) fn owned_project_ids(user_id: Uuid) -> SelectStatement {
    Query::select()
        .column(project::Column::Id)
        .from(Project)
        .and_where(project::Column::UserId.eq(user_id))
        .to_owned()
}

#[derive(Clone)]
pub struct ProjectDao {
    db: DatabaseConnection,
}

impl DaoBase for ProjectDao {
    type Entity = Project;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ProjectDao {
    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        name: &str,
        color: &str,
    ) -> DaoResult<project::Model> {
        let model = project::ActiveModel {
            user_id: Set(user_id),
            name: Set(name.to_string()),
            color: Set(color.to_string()),
            is_completed: Set(false),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> DaoResult<Vec<project::Model>> {
        self.find_iter(None, None, move |query| {
            query.filter(project::Column::UserId.eq(user_id))
        })
        .collect_all()
        .await
    }

    pub async fn find_owned(&self, user_id: Uuid, id: Uuid) -> DaoResult<Option<project::Model>> {
        self.find_one(move |query| {
            query
                .filter(project::Column::Id.eq(id))
                .filter(project::Column::UserId.eq(user_id))
        })
        .await
    }

    /// `None` when the project is absent or belongs to someone else.
    pub async fn update_owned(
        &self,
        user_id: Uuid,
        id: Uuid,
        name: Option<String>,
        color: Option<String>,
        is_completed: Option<bool>,
    ) -> DaoResult<Option<project::Model>> {
        let Some(_) = self.find_owned(user_id, id).await? else {
            return Ok(None);
        };
        let model = self
            .update(id, move |active| {
                if let Some(name) = name {
                    active.name = Set(name);
                }
                if let Some(color) = color {
                    active.color = Set(color);
                }
                if let Some(is_completed) = is_completed {
                    active.is_completed = Set(is_completed);
                }
            })
            .await?;
        Ok(Some(model))
    }

    /// Deletes the project, its todos and every time entry recorded against
    /// either, all in one transaction. `None` when the user does not own it.
    pub async fn delete_with_dependents(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> DaoResult<Option<DeletedRows>> {
        let txn = self.db.begin().await?;

        let owned = Project::find_by_id(id)
            .filter(project::Column::UserId.eq(user_id))
            .one(&txn)
            .await?;
        if owned.is_none() {
            return Ok(None);
        }

        let project_todos = Query::select()
            .column(todo::Column::Id)
            .from(Todo)
            .and_where(todo::Column::ProjectId.eq(id))
            .to_owned();
        let time_entries = TimeEntry::delete_many()
            .filter(
                Condition::any()
                    .add(time_entry::Column::ProjectId.eq(id))
                    .add(time_entry::Column::TodoId.in_subquery(project_todos)),
            )
            .exec(&txn)
            .await?
            .rows_affected;
        let todos = Todo::delete_many()
            .filter(todo::Column::ProjectId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        let projects = Project::delete_by_id(id).exec(&txn).await?.rows_affected;

        txn.commit().await?;
        Ok(Some(DeletedRows {
            projects,
            todos,
            time_entries,
            settings: 0,
        }))
    }
}
