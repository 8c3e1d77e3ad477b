use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use super::{require_text, respond_with_board};
use crate::api::dto::AddTagRequest;
use crate::api::AppState;
use crate::domain::{Board, KanbanError, TaskPatch};

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Arc<Board>>, KanbanError> {
    if let Some(content) = &patch.content {
        require_text("content", content)?;
    }

    let mut editor = state.editor.lock().await;
    let changed = editor.store_mut().update_task(&id, &patch);
    respond_with_board(&state, &editor, changed)
}

pub async fn add_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddTagRequest>,
) -> Result<Json<Arc<Board>>, KanbanError> {
    require_text("tag", &req.tag)?;

    let mut editor = state.editor.lock().await;
    let changed = editor.store_mut().add_tag(&id, &req.tag);
    respond_with_board(&state, &editor, changed)
}

pub async fn remove_tag(
    State(state): State<AppState>,
    Path((id, tag)): Path<(String, String)>,
) -> Result<Json<Arc<Board>>, KanbanError> {
    let mut editor = state.editor.lock().await;
    let changed = editor.store_mut().remove_tag(&id, &tag);
    respond_with_board(&state, &editor, changed)
}
