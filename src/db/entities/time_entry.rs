use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

/// Seconds spent on a todo. `project_id` is copied from the todo when the
/// entry is recorded.
#[base_entity(created_at = "timestamp")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "time_entries")]
pub struct Model {
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    #[sea_orm(indexed)]
    pub todo_id: Uuid,
    #[sea_orm(indexed)]
    pub project_id: Uuid,
    pub duration: i64,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "todo_id", to = "id", on_delete = "Cascade")]
    pub todo: HasOne<super::todo::Entity>,
    #[sea_orm(belongs_to, from = "project_id", to = "id", on_delete = "Cascade")]
    pub project: HasOne<super::project::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
