pub mod auth_service;
pub mod context;
pub mod project_service;
pub mod settings_service;
pub mod stats_service;
pub mod time_entry_service;
pub mod todo_service;
pub mod user_service;

pub use context::ServiceContext;
