pub mod auth;
pub mod projects;
mod router;
pub mod settings;
pub mod stats;
pub mod time_entries;
pub mod todos;

pub use router::router;
