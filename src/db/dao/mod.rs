pub mod base;
pub mod base_traits;
pub mod cascade;
pub mod context;
pub mod error;
pub mod project_dao;
pub mod settings_dao;
pub mod time_entry_dao;
pub mod todo_dao;
pub mod user_dao;

pub use base::{DaoBase, DaoPager, PaginatedResponse};
pub use base_traits::{HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};
pub use cascade::DeletedRows;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use project_dao::ProjectDao;
pub use settings_dao::SettingsDao;
pub use time_entry_dao::TimeEntryDao;
pub use todo_dao::TodoDao;
pub use user_dao::UserDao;
