use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use super::Priority;

/// A single task on a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Task {
    pub fn new(id: String, content: String) -> Self {
        Self {
            id,
            content,
            description: None,
            tags: None,
            priority: Some(Priority::default()),
        }
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// An ordered list of tasks. Task order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Arc<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Column {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            tasks: Vec::new(),
            color: None,
        }
    }

    pub fn task_position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    pub fn task_titles(&self) -> Vec<String> {
        self.tasks.iter().map(|t| t.content.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Arc<Column>>,
}

impl Board {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            columns: Vec::new(),
        }
    }

    pub fn column(&self, column_id: &str) -> Option<&Arc<Column>> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Find a task anywhere on the board, with the column that owns it.
    pub fn find_task(&self, task_id: &str) -> Option<(&Arc<Column>, &Arc<Task>)> {
        self.columns.iter().find_map(|col| {
            col.tasks
                .iter()
                .find(|t| t.id == task_id)
                .map(|task| (col, task))
        })
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Copy of the board with a different column sequence; columns are shared.
    pub fn with_columns(&self, columns: Vec<Arc<Column>>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            columns,
        }
    }
}

/// Partial update of a task. `None` leaves a field alone; for the optional
/// fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub tags: Option<Option<Vec<String>>>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.priority.is_none()
    }

    pub fn apply(&self, task: &Task) -> Task {
        let mut next = task.clone();
        if let Some(content) = &self.content {
            next.content = content.clone();
        }
        if let Some(description) = &self.description {
            next.description = description.clone();
        }
        if let Some(tags) = &self.tags {
            next.tags = tags.clone();
        }
        if let Some(priority) = self.priority {
            next.priority = Some(priority);
        }
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub color: Option<Option<String>>,
}

impl ColumnPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.color.is_none()
    }

    pub fn apply(&self, column: &Column) -> Column {
        let mut next = column.clone();
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(color) = &self.color {
            next.color = color.clone();
        }
        next
    }
}

// Absent field -> None (via #[serde(default)]), `null` -> Some(None).
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
