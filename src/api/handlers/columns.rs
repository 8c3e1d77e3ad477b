use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{active_snapshot, require_text, respond_with_board};
use crate::api::dto::{ConfirmQuery, CreateColumnRequest, CreateTaskRequest};
use crate::api::AppState;
use crate::domain::{Board, ColumnPatch, Confirmation, KanbanError};

pub async fn create_column(
    State(state): State<AppState>,
    Json(req): Json<CreateColumnRequest>,
) -> Result<(StatusCode, Json<Arc<Board>>), KanbanError> {
    require_text("title", &req.title)?;

    let mut editor = state.editor.lock().await;
    // the active board must exist before anything is created on it
    active_snapshot(&editor)?;
    let created = editor.store_mut().create_column(&req.title);
    if let Some(column) = &created {
        tracing::debug!(column_id = column.id.as_str(), "Column created");
    }

    let board = respond_with_board(&state, &editor, created.is_some())?;
    let status = if created.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, board))
}

pub async fn update_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ColumnPatch>,
) -> Result<Json<Arc<Board>>, KanbanError> {
    if let Some(title) = &patch.title {
        require_text("title", title)?;
    }

    let mut editor = state.editor.lock().await;
    let changed = editor.store_mut().update_column(&id, &patch);
    respond_with_board(&state, &editor, changed)
}

pub async fn delete_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<Arc<Board>>, KanbanError> {
    let mut editor = state.editor.lock().await;
    let changed = editor
        .store_mut()
        .delete_column(&id, Confirmation::from(query.confirm));
    if changed {
        tracing::debug!(column_id = id.as_str(), "Column deleted");
    }
    respond_with_board(&state, &editor, changed)
}

pub async fn create_task(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Arc<Board>>), KanbanError> {
    require_text("content", &req.content)?;

    let mut editor = state.editor.lock().await;
    active_snapshot(&editor)?;
    let created = editor.store_mut().create_task(&column_id, &req.content);
    if let Some(task) = &created {
        tracing::debug!(task_id = task.id.as_str(), column_id = column_id.as_str(), "Task created");
    }

    let board = respond_with_board(&state, &editor, created.is_some())?;
    let status = if created.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, board))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path((column_id, task_id)): Path<(String, String)>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<Arc<Board>>, KanbanError> {
    let mut editor = state.editor.lock().await;
    let changed = editor.store_mut().delete_task(
        &column_id,
        &task_id,
        Confirmation::from(query.confirm),
    );
    respond_with_board(&state, &editor, changed)
}
