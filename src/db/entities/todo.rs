use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Todos have no owner column; they belong to whoever owns `project_id`.
#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(indexed)]
    pub project_id: Uuid,
    pub title: String,
    pub status: String,
    #[sea_orm(belongs_to, from = "project_id", to = "id", on_delete = "Cascade")]
    pub project: HasOne<super::project::Entity>,
    #[sea_orm(has_many)]
    pub time_entries: HasMany<super::time_entry::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

/// Workflow state of a todo. Any state may move to any other.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 3] = [TodoStatus::Todo, TodoStatus::InProgress, TodoStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "todo",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Done => "done",
        }
    }

    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(TodoStatus::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl TryFrom<&str> for TodoStatus {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "todo" => Ok(TodoStatus::Todo),
            "in-progress" => Ok(TodoStatus::InProgress),
            "done" => Ok(TodoStatus::Done),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::TodoStatus;

    #[test]
    fn status_string_roundtrip() {
        for status in TodoStatus::ALL {
            assert_eq!(TodoStatus::try_from(status.as_str()), Ok(status));
        }
        assert!(TodoStatus::try_from("archived").is_err());
        assert!(TodoStatus::try_from("Done").is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&TodoStatus::InProgress).expect("serialize status");
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn allowed_values_lists_every_state() {
        assert_eq!(TodoStatus::allowed_values(), "todo, in-progress, done");
    }
}
