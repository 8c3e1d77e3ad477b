pub mod ai;
pub mod boards;
pub mod columns;
pub mod drag;
pub mod sse;
pub mod tasks;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::domain::{Board, KanbanError, COLUMN_COLORS};
use crate::services::{BoardEvent, Editor};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

pub async fn list_column_colors() -> Json<Value> {
    Json(json!(COLUMN_COLORS))
}

fn active_snapshot(editor: &Editor) -> Result<Arc<Board>, KanbanError> {
    editor
        .store()
        .active_board()
        .cloned()
        .ok_or_else(|| KanbanError::NotFound("No active board".into()))
}

/// Current active board, announcing it first if the operation changed it.
/// Stale ids simply come back with the unchanged board.
fn respond_with_board(
    state: &AppState,
    editor: &Editor,
    changed: bool,
) -> Result<Json<Arc<Board>>, KanbanError> {
    let board = active_snapshot(editor)?;
    if changed {
        state.publish(BoardEvent::BoardChanged {
            board_id: board.id.clone(),
        });
    }
    Ok(Json(board))
}

fn require_text(field: &str, value: &str) -> Result<(), KanbanError> {
    if value.trim().is_empty() {
        return Err(KanbanError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}
