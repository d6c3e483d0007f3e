//! Per-operation input validation.
//!
//! Each validator takes the raw request payload and returns either the
//! normalized value the services expect or every field violation it found.

use serde::Serialize;
use uuid::Uuid;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type Validated<T> = Result<T, Vec<FieldViolation>>;

#[derive(Debug, Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    fn finish<T>(self, value: T) -> Validated<T> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
}

/// Usernames are kept exactly as sent; only the length policy applies.
pub fn validate_registration(username: &str, password: &str) -> Validated<Registration> {
    let mut violations = Violations::default();

    if username.chars().count() < MIN_USERNAME_LEN {
        violations.push(
            "username",
            format!("Username must be at least {MIN_USERNAME_LEN} characters"),
        );
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        violations.push(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }

    violations.finish(Registration {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub color: String,
}

pub fn validate_new_project(name: &str, color: &str) -> Validated<NewProject> {
    let mut violations = Violations::default();
    let name = required_text(&mut violations, "name", name);
    let color = required_text(&mut violations, "color", color);
    violations.finish(NewProject { name, color })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub is_completed: Option<bool>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none() && self.is_completed.is_none()
    }
}

pub fn validate_project_patch(
    name: Option<&str>,
    color: Option<&str>,
    is_completed: Option<bool>,
) -> Validated<ProjectPatch> {
    let mut violations = Violations::default();
    let name = name.map(|value| required_text(&mut violations, "name", value));
    let color = color.map(|value| required_text(&mut violations, "color", value));
    violations.finish(ProjectPatch {
        name,
        color,
        is_completed,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub project_id: Uuid,
    pub title: String,
}

pub fn validate_new_todo(project_id: Uuid, title: &str) -> Validated<NewTodo> {
    let mut violations = Violations::default();
    let title = required_text(&mut violations, "title", title);
    violations.finish(NewTodo { project_id, title })
}

/// The status stays a raw string here: its state check belongs to the todo
/// service so that an unknown value is reported as a bad request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub status: Option<String>,
}

pub fn validate_todo_patch(title: Option<&str>, status: Option<&str>) -> Validated<TodoPatch> {
    let mut violations = Violations::default();
    let title = title.map(|value| required_text(&mut violations, "title", value));
    violations.finish(TodoPatch {
        title,
        status: status.map(str::to_string),
    })
}

/// Longest single time entry accepted, in seconds.
pub const MAX_DURATION_SECS: i64 = i32::MAX as i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeEntry {
    pub todo_id: Uuid,
    pub duration: i64,
    pub project_id: Option<Uuid>,
}

pub fn validate_new_time_entry(
    todo_id: Uuid,
    duration: i64,
    project_id: Option<Uuid>,
) -> Validated<NewTimeEntry> {
    let mut violations = Violations::default();
    if duration < 0 {
        violations.push("duration", "Duration must be a non-negative number of seconds");
    } else if duration > MAX_DURATION_SECS {
        violations.push("duration", "Duration is too large");
    }
    violations.finish(NewTimeEntry {
        todo_id,
        duration,
        project_id,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub focus_duration: Option<i32>,
    pub break_duration: Option<i32>,
}

pub fn validate_settings_patch(
    focus_duration: Option<i32>,
    break_duration: Option<i32>,
) -> Validated<SettingsPatch> {
    let mut violations = Violations::default();
    for (field, value) in [
        ("focus_duration", focus_duration),
        ("break_duration", break_duration),
    ] {
        if matches!(value, Some(minutes) if minutes <= 0) {
            violations.push(field, "Duration must be a positive number of minutes");
        }
    }
    violations.finish(SettingsPatch {
        focus_duration,
        break_duration,
    })
}

fn required_text(violations: &mut Violations, field: &'static str, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        violations.push(field, format!("{field} must not be empty"));
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn registration_enforces_length_policy() {
        let err = validate_registration("al", "12345").expect_err("both fields are too short");
        let fields: Vec<_> = err.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["username", "password"]);

        let ok = validate_registration("alice", "secret1").expect("valid registration");
        assert_eq!(ok.username, "alice");
    }

    #[test]
    fn registration_keeps_username_case() {
        let ok = validate_registration("Alice", "secret1").expect("valid registration");
        assert_eq!(ok.username, "Alice");
    }

    #[test]
    fn new_project_trims_and_requires_fields() {
        let ok = validate_new_project("  Launch ", "#fff").expect("valid project");
        assert_eq!(ok.name, "Launch");

        let err = validate_new_project(" ", "").expect_err("empty fields rejected");
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn project_patch_only_checks_present_fields() {
        let patch = validate_project_patch(None, None, Some(true)).expect("valid patch");
        assert_eq!(patch.is_completed, Some(true));
        assert!(!patch.is_empty());

        let err = validate_project_patch(Some(""), None, None).expect_err("empty name rejected");
        assert_eq!(err[0].field, "name");
    }

    #[test]
    fn todo_patch_passes_status_through_unchecked() {
        let patch = validate_todo_patch(None, Some("archived")).expect("status is not checked");
        assert_eq!(patch.status.as_deref(), Some("archived"));
    }

    #[test]
    fn time_entry_rejects_negative_duration() {
        let todo_id = Uuid::new_v4();
        assert!(validate_new_time_entry(todo_id, 0, None).is_ok());

        let err = validate_new_time_entry(todo_id, -1, None).expect_err("negative duration");
        assert_eq!(err[0].field, "duration");
    }

    #[test]
    fn time_entry_caps_duration() {
        let todo_id = Uuid::new_v4();
        assert!(validate_new_time_entry(todo_id, MAX_DURATION_SECS, None).is_ok());

        let err = validate_new_time_entry(todo_id, i64::MAX, None).expect_err("oversized duration");
        assert_eq!(err[0].field, "duration");
    }

    #[test]
    fn settings_patch_requires_positive_minutes() {
        assert!(validate_settings_patch(Some(50), None).is_ok());

        let err = validate_settings_patch(Some(0), Some(-5)).expect_err("non-positive minutes");
        let fields: Vec<_> = err.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["focus_duration", "break_duration"]);
    }
}
