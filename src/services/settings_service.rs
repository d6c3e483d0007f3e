use uuid::Uuid;

use crate::{
    db::dao::SettingsDao, db::entities::pomodoro_settings, error::AppError,
    validation::SettingsPatch,
};

#[derive(Clone)]
pub struct SettingsService {
    settings_dao: SettingsDao,
}

impl SettingsService {
    pub fn new(settings_dao: SettingsDao) -> Self {
        Self { settings_dao }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<pomodoro_settings::Model, AppError> {
        Ok(self.settings_dao.get_or_create(user_id).await?)
    }

    pub async fn put(
        &self,
        user_id: Uuid,
        patch: SettingsPatch,
    ) -> Result<pomodoro_settings::Model, AppError> {
        Ok(self
            .settings_dao
            .update_for_user(user_id, patch.focus_duration, patch.break_duration)
            .await?)
    }
}
