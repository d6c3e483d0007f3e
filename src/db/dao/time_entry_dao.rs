use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::TimeEntry;
use crate::db::entities::time_entry;

#[derive(Clone)]
pub struct TimeEntryDao {
    db: DatabaseConnection,
}

impl DaoBase for TimeEntryDao {
    type Entity = TimeEntry;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TimeEntryDao {
    pub async fn record(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        project_id: Uuid,
        duration: i64,
    ) -> DaoResult<time_entry::Model> {
        let model = time_entry::ActiveModel {
            user_id: Set(user_id),
            todo_id: Set(todo_id),
            project_id: Set(project_id),
            duration: Set(duration),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> DaoResult<Vec<time_entry::Model>> {
        self.find_iter(None, None, move |query| {
            query.filter(time_entry::Column::UserId.eq(user_id))
        })
        .collect_all()
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::TimeEntryDao;
    use crate::db::dao::DaoBase;
    use crate::db::entities::time_entry;

    fn entry_model(user_id: Uuid, duration: i64) -> time_entry::Model {
        let now = FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
            .single()
            .expect("timestamp should be valid");
        time_entry::Model {
            id: Uuid::new_v4(),
            timestamp: now,
            updated_at: now,
            user_id,
            todo_id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            duration,
        }
    }

    #[tokio::test]
    async fn list_for_user_keeps_row_order() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([[entry_model(user_id, 1500), entry_model(user_id, 300)]])
            .into_connection();
        let dao = TimeEntryDao::new(&db);

        let entries = dao
            .list_for_user(user_id)
            .await
            .expect("query should succeed");
        let durations: Vec<i64> = entries.iter().map(|entry| entry.duration).collect();
        assert_eq!(durations, vec![1500, 300]);
    }
}
