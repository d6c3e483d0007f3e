use sea_orm::DatabaseConnection;

use super::{DaoBase, ProjectDao, SettingsDao, TimeEntryDao, TodoDao, UserDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn project(&self) -> ProjectDao {
        DaoBase::new(&self.db)
    }

    pub fn todo(&self) -> TodoDao {
        DaoBase::new(&self.db)
    }

    pub fn time_entry(&self) -> TimeEntryDao {
        DaoBase::new(&self.db)
    }

    pub fn settings(&self) -> SettingsDao {
        DaoBase::new(&self.db)
    }
}
