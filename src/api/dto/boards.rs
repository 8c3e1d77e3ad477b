use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Board, DragIntent, DragKind, LoadingScope, Task};
use crate::services::{BoardStore, DragState, Editor};

#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameBoardRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectBoardRequest {
    pub board_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateColumnRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct AddTagRequest {
    pub tag: String,
}

/// Deletes only go through with `?confirm=true`.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub id: String,
    pub title: String,
    pub column_count: usize,
    pub task_count: usize,
}

impl From<&Board> for BoardSummary {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id.clone(),
            title: board.title.clone(),
            column_count: board.columns.len(),
            task_count: board.task_count(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardsResponse {
    pub active_board_id: Option<String>,
    pub boards: Vec<BoardSummary>,
}

impl From<&BoardStore> for BoardsResponse {
    fn from(store: &BoardStore) -> Self {
        Self {
            active_board_id: store.active_board_id().map(str::to_string),
            boards: store.boards().iter().map(|b| BoardSummary::from(b.as_ref())).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragOverRequest {
    pub target_id: String,
    pub target_kind: DragKind,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropRequest {
    pub target_column_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResponse {
    pub state: DragState,
    pub intent: Option<DragIntent>,
    pub board: Option<Arc<Board>>,
}

impl From<&Editor> for DragResponse {
    fn from(editor: &Editor) -> Self {
        Self {
            state: editor.drag().state(),
            intent: editor.drag().intent().cloned(),
            board: editor.store().active_board().cloned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub created: Vec<Arc<Task>>,
    pub board: Option<Arc<Board>>,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub description: Option<String>,
    pub applied: bool,
    pub board: Option<Arc<Board>>,
}

#[derive(Debug, Serialize)]
pub struct AiStatusResponse {
    /// False when no API key is configured and every request degrades.
    pub enabled: bool,
    pub loading: Option<LoadingScope>,
}
