use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

pub const DEFAULT_FOCUS_MINUTES: i32 = 25;
pub const DEFAULT_BREAK_MINUTES: i32 = 5;

/// One row per user; the unique index on `user_id` is what keeps it that way.
#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pomodoro_settings")]
pub struct Model {
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub focus_duration: i32,
    pub break_duration: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
