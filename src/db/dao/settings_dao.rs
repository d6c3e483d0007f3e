use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::pomodoro_settings::{
    self, DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES,
};
use crate::db::entities::prelude::PomodoroSettings;

#[derive(Clone)]
pub struct SettingsDao {
    db: DatabaseConnection,
}

impl DaoBase for SettingsDao {
    type Entity = PomodoroSettings;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl SettingsDao {
    pub async fn find_for_user(
        &self,
        user_id: Uuid,
    ) -> DaoResult<Option<pomodoro_settings::Model>> {
        self.find_one(move |query| {
            query.filter(pomodoro_settings::Column::UserId.eq(user_id))
        })
        .await
    }

    /// Returns the user's row, inserting the defaults on first access.
    pub async fn get_or_create(&self, user_id: Uuid) -> DaoResult<pomodoro_settings::Model> {
        if let Some(existing) = self.find_for_user(user_id).await? {
            return Ok(existing);
        }
        self.insert_defaults(user_id).await
    }

    /// If a concurrent request inserted first, the unique index rejects this
    /// insert and the winner's row is read back instead.
    pub(crate) async fn insert_defaults(
        &self,
        user_id: Uuid,
    ) -> DaoResult<pomodoro_settings::Model> {
        let defaults = pomodoro_settings::ActiveModel {
            user_id: Set(user_id),
            focus_duration: Set(DEFAULT_FOCUS_MINUTES),
            break_duration: Set(DEFAULT_BREAK_MINUTES),
            ..Default::default()
        };
        match self.create(defaults).await {
            Ok(created) => Ok(created),
            Err(DaoLayerError::Conflict { entity }) => {
                tracing::debug!(%user_id, "settings insert lost a race; re-reading");
                self.find_for_user(user_id)
                    .await?
                    .ok_or(DaoLayerError::NotFound {
                        entity,
                        id: user_id,
                    })
            }
            Err(err) => Err(err),
        }
    }

    pub async fn update_for_user(
        &self,
        user_id: Uuid,
        focus_duration: Option<i32>,
        break_duration: Option<i32>,
    ) -> DaoResult<pomodoro_settings::Model> {
        let current = self.get_or_create(user_id).await?;
        if focus_duration.is_none() && break_duration.is_none() {
            return Ok(current);
        }
        self.update(current.id, move |active| {
            if let Some(focus) = focus_duration {
                active.focus_duration = Set(focus);
            }
            if let Some(brk) = break_duration {
                active.break_duration = Set(brk);
            }
        })
        .await
    }
}
