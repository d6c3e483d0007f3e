#[allow(unused_imports)]
pub mod prelude {
    pub use super::pomodoro_settings::Entity as PomodoroSettings;
    pub use super::project::Entity as Project;
    pub use super::time_entry::Entity as TimeEntry;
    pub use super::todo::Entity as Todo;
    pub use super::user::Entity as User;
}

pub mod pomodoro_settings;
pub mod project;
pub mod time_entry;
pub mod todo;
pub mod user;

pub use todo::TodoStatus;
