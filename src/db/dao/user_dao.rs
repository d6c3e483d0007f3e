use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

use super::project_dao::owned_project_ids;
use super::{DaoBase, DaoLayerError, DaoResult, DeletedRows};
use crate::db::entities::prelude::{PomodoroSettings, Project, TimeEntry, Todo, User};
use crate::db::entities::{pomodoro_settings, project, time_entry, todo, user};

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn find_by_username(&self, username: &str) -> DaoResult<Option<user::Model>> {
        let username = username.to_string();
        self.find_one(move |query| query.filter(user::Column::Username.eq(username)))
            .await
    }

    /// Fails with `Conflict` when the username is already taken, including
    /// when another request wins the unique index first.
    pub async fn create_user(&self, username: &str, password_hash: &str) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    /// Removes the user and everything reachable from it in one transaction.
    pub async fn delete_with_dependents(&self, user_id: Uuid) -> DaoResult<DeletedRows> {
        let txn = self.db.begin().await?;

        let time_entries = TimeEntry::delete_many()
            .filter(time_entry::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?
            .rows_affected;
        let todos = Todo::delete_many()
            .filter(todo::Column::ProjectId.in_subquery(owned_project_ids(user_id)))
            .exec(&txn)
            .await?
            .rows_affected;
        let projects = Project::delete_many()
            .filter(project::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?
            .rows_affected;
        let settings = PomodoroSettings::delete_many()
            .filter(pomodoro_settings::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?
            .rows_affected;

        let removed = User::delete_by_id(user_id).exec(&txn).await?.rows_affected;
        if removed == 0 {
            return Err(DaoLayerError::NotFound {
                entity: "users",
                id: user_id,
            });
        }

        txn.commit().await?;
        Ok(DeletedRows {
            projects,
            todos,
            time_entries,
            settings,
        })
    }
}
