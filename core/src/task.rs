use alloc::{string::String, vec::Vec};

/// One line on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    text: String,
    completed: bool,
    owner: Option<String>,
}

impl Task {
    pub fn new(text: impl Into<String>, completed: bool) -> Self {
        Task {
            text: text.into(),
            completed,
            owner: None,
        }
    }

    /// Assigns an owner label. An empty label leaves the task ungrouped.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        let owner = owner.into();
        self.owner = if owner.is_empty() { None } else { Some(owner) };
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

/// Key of one bucket in [`TaskGroups`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKey {
    /// Tasks without an owner label.
    Ungrouped,
    Owner(String),
}

impl GroupKey {
    fn matches(&self, owner: Option<&str>) -> bool {
        match (self, owner) {
            (GroupKey::Ungrouped, None) => true,
            (GroupKey::Owner(label), Some(owner)) => label == owner,
            _ => false,
        }
    }
}

/// Tasks bucketed by owner, buckets in order of first appearance, tasks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskGroups {
    groups: Vec<(GroupKey, Vec<Task>)>,
}

impl TaskGroups {
    pub fn from_tasks<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = Task>,
    {
        let mut groups: Vec<(GroupKey, Vec<Task>)> = Vec::new();
        for task in tasks {
            match groups.iter_mut().find(|(key, _)| key.matches(task.owner())) {
                Some((_, bucket)) => bucket.push(task),
                None => {
                    let key = match task.owner() {
                        Some(owner) => GroupKey::Owner(String::from(owner)),
                        None => GroupKey::Ungrouped,
                    };
                    groups.push((key, alloc::vec![task]));
                }
            }
        }
        TaskGroups { groups }
    }

    /// Tasks of `owner`, empty when nobody by that name appeared.
    pub fn owner(&self, owner: &str) -> &[Task] {
        self.get(Some(owner))
    }

    pub fn ungrouped(&self) -> &[Task] {
        self.get(None)
    }

    fn get(&self, owner: Option<&str>) -> &[Task] {
        self.groups
            .iter()
            .find(|(key, _)| key.matches(owner))
            .map(|(_, tasks)| tasks.as_slice())
            .unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.iter().map(|(key, _)| key)
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of tasks across all buckets.
    pub fn task_count(&self) -> usize {
        self.groups.iter().map(|(_, tasks)| tasks.len()).sum()
    }
}
