use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::entities::{project, time_entry, todo},
    error::AppError,
    services::{
        project_service::ProjectService, time_entry_service::TimeEntryService,
        todo_service::TodoService,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTotal {
    pub project_id: Uuid,
    pub name: String,
    pub color: String,
    pub total_duration: i64,
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoTotal {
    pub todo_id: Uuid,
    pub title: String,
    pub total_duration: i64,
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total_duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_duration: i64,
    pub entry_count: usize,
    pub by_project: Vec<ProjectTotal>,
    pub by_todo: Vec<TodoTotal>,
    pub by_day: Vec<DayTotal>,
}

#[derive(Clone)]
pub struct StatsService {
    projects: ProjectService,
    todos: TodoService,
    entries: TimeEntryService,
}

impl StatsService {
    pub fn new(projects: ProjectService, todos: TodoService, entries: TimeEntryService) -> Self {
        Self {
            projects,
            todos,
            entries,
        }
    }

    pub async fn summary(&self, user_id: Uuid) -> Result<StatsSummary, AppError> {
        let projects = self.projects.list(user_id).await?;
        let todos = self.todos.list(user_id).await?;
        let entries = self.entries.list(user_id).await?;
        Ok(summarize(&projects, &todos, &entries))
    }
}

#[derive(Default)]
struct Tally {
    total: i64,
    count: usize,
}

impl Tally {
    fn add(&mut self, duration: i64) {
        self.total = self.total.saturating_add(duration);
        self.count += 1;
    }
}

/// Folds already ownership-filtered rows into totals. Projects and todos
/// come out longest first; days come out in calendar order (UTC).
pub fn summarize(
    projects: &[project::Model],
    todos: &[todo::Model],
    entries: &[time_entry::Model],
) -> StatsSummary {
    let mut per_project: HashMap<Uuid, Tally> = HashMap::new();
    let mut per_todo: HashMap<Uuid, Tally> = HashMap::new();
    let mut per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    let mut total_duration: i64 = 0;

    for entry in entries {
        total_duration = total_duration.saturating_add(entry.duration);
        per_project.entry(entry.project_id).or_default().add(entry.duration);
        per_todo.entry(entry.todo_id).or_default().add(entry.duration);
        let day = entry.timestamp.with_timezone(&Utc).date_naive();
        let day_total = per_day.entry(day).or_default();
        *day_total = day_total.saturating_add(entry.duration);
    }

    let mut by_project: Vec<ProjectTotal> = projects
        .iter()
        .filter_map(|project| {
            per_project.get(&project.id).map(|tally| ProjectTotal {
                project_id: project.id,
                name: project.name.clone(),
                color: project.color.clone(),
                total_duration: tally.total,
                entry_count: tally.count,
            })
        })
        .collect();
    by_project.sort_by(|a, b| {
        b.total_duration
            .cmp(&a.total_duration)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut by_todo: Vec<TodoTotal> = todos
        .iter()
        .filter_map(|todo| {
            per_todo.get(&todo.id).map(|tally| TodoTotal {
                todo_id: todo.id,
                title: todo.title.clone(),
                total_duration: tally.total,
                entry_count: tally.count,
            })
        })
        .collect();
    by_todo.sort_by(|a, b| {
        b.total_duration
            .cmp(&a.total_duration)
            .then_with(|| a.title.cmp(&b.title))
    });

    let by_day = per_day
        .into_iter()
        .map(|(date, total_duration)| DayTotal {
            date,
            total_duration,
        })
        .collect();

    StatsSummary {
        total_duration,
        entry_count: entries.len(),
        by_project,
        by_todo,
        by_day,
    }
}
