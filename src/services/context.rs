use sea_orm::DatabaseConnection;

use crate::{
    auth::TokenService,
    db::dao::DaoContext,
    services::{
        auth_service::AuthService, project_service::ProjectService,
        settings_service::SettingsService, stats_service::StatsService,
        time_entry_service::TimeEntryService, todo_service::TodoService,
        user_service::UserService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user())
    }

    pub fn auth<'a>(&self, tokens: &'a TokenService) -> AuthService<'a> {
        AuthService::new(self.user(), tokens)
    }

    pub fn project(&self) -> ProjectService {
        ProjectService::new(self.daos.project())
    }

    pub fn todo(&self) -> TodoService {
        TodoService::new(self.daos.todo(), self.daos.project())
    }

    pub fn time_entry(&self) -> TimeEntryService {
        TimeEntryService::new(self.daos.time_entry(), self.daos.todo())
    }

    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self.daos.settings())
    }

    pub fn stats(&self) -> StatsService {
        StatsService::new(self.project(), self.todo(), self.time_entry())
    }
}
