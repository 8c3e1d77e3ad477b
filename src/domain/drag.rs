use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DragKind {
    Task,
    Column,
}

/// The element being dragged and where it currently sits.
///
/// `column_id` is only present for tasks. `index` is the element's position in
/// its container and is kept current while a column is reordered live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragIntent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
    pub index: usize,
    #[serde(rename = "type")]
    pub kind: DragKind,
}

impl DragIntent {
    pub fn task(id: impl Into<String>, column_id: impl Into<String>, index: usize) -> Self {
        Self {
            id: id.into(),
            column_id: Some(column_id.into()),
            index,
            kind: DragKind::Task,
        }
    }

    pub fn column(id: impl Into<String>, index: usize) -> Self {
        Self {
            id: id.into(),
            column_id: None,
            index,
            kind: DragKind::Column,
        }
    }
}
