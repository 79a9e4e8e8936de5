//! Where tasks come from.

use std::fmt;

use todo_display_core::Task;

/// One row as a task store hands it over, before any cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskRecord {
    pub text: String,
    /// Free-form status column; `done` in any case marks the task completed.
    pub status: String,
    pub owner: String,
}

impl TaskRecord {
    pub fn new(text: impl Into<String>, status: impl Into<String>) -> Self {
        TaskRecord {
            text: text.into(),
            status: status.into(),
            owner: String::new(),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// `None` for rows without task text.
    pub fn into_task(self) -> Option<Task> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        let completed = self.status.trim().eq_ignore_ascii_case("done");
        Some(Task::new(text, completed).with_owner(self.owner.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Unavailable(String),
    Malformed(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(reason) => write!(f, "task source unavailable: {reason}"),
            SourceError::Malformed(reason) => write!(f, "malformed task data: {reason}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// A store the board reads its tasks from once per refresh.
pub trait TaskSource {
    fn fetch(&mut self) -> Result<Vec<TaskRecord>, SourceError>;
}

impl<F> TaskSource for F
where
    F: FnMut() -> Result<Vec<TaskRecord>, SourceError>,
{
    fn fetch(&mut self) -> Result<Vec<TaskRecord>, SourceError> {
        self()
    }
}

/// A fixed list of records, returned on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<TaskRecord>,
}

impl StaticSource {
    pub fn new(records: impl IntoIterator<Item = TaskRecord>) -> Self {
        StaticSource {
            records: records.into_iter().collect(),
        }
    }
}

impl TaskSource for StaticSource {
    fn fetch(&mut self) -> Result<Vec<TaskRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Converts records to tasks in order, skipping rows without text.
pub fn collect_tasks(records: impl IntoIterator<Item = TaskRecord>) -> Vec<Task> {
    records.into_iter().filter_map(TaskRecord::into_task).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_blank_rows() {
        let tasks = collect_tasks([
            TaskRecord::new("Buy milk", ""),
            TaskRecord::new("   ", "done"),
            TaskRecord::new(" Walk dog ", "DONE").with_owner("Stacy"),
            TaskRecord::new("Fix sink", "done-ish"),
        ]);

        assert_eq!(
            tasks,
            [
                Task::new("Buy milk", false),
                Task::new("Walk dog", true).with_owner("Stacy"),
                Task::new("Fix sink", false),
            ]
        );
        assert_eq!(tasks[0].owner(), None);
    }

    #[test]
    fn closures_are_sources() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            Err::<Vec<TaskRecord>, _>(SourceError::Unavailable(String::from("offline")))
        };
        assert!(source.fetch().is_err());
        assert_eq!(calls, 1);
    }
}
