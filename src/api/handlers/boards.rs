use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{active_snapshot, require_text};
use crate::api::dto::{
    BoardsResponse, ConfirmQuery, CreateBoardRequest, RenameBoardRequest, SelectBoardRequest,
};
use crate::api::AppState;
use crate::domain::{Board, Confirmation, KanbanError};
use crate::services::BoardEvent;

pub async fn list_boards(State(state): State<AppState>) -> Json<BoardsResponse> {
    let editor = state.editor.lock().await;
    Json(BoardsResponse::from(editor.store()))
}

pub async fn create_board(
    State(state): State<AppState>,
    Json(req): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<Arc<Board>>), KanbanError> {
    require_text("title", &req.title)?;

    let mut editor = state.editor.lock().await;
    let board = editor
        .create_board(&req.title)
        .ok_or_else(|| KanbanError::BadRequest("title must not be empty".into()))?;

    tracing::info!(board_id = board.id.as_str(), title = board.title.as_str(), "Board created");
    state.publish(BoardEvent::BoardsChanged {
        active_board_id: Some(board.id.clone()),
    });

    Ok((StatusCode::CREATED, Json(board)))
}

pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Arc<Board>>, KanbanError> {
    let editor = state.editor.lock().await;
    editor
        .store()
        .board(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| KanbanError::NotFound(format!("Board not found: {}", id)))
}

pub async fn get_active_board(
    State(state): State<AppState>,
) -> Result<Json<Arc<Board>>, KanbanError> {
    let editor = state.editor.lock().await;
    active_snapshot(&editor).map(Json)
}

pub async fn rename_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RenameBoardRequest>,
) -> Result<Json<Arc<Board>>, KanbanError> {
    require_text("title", &req.title)?;

    let mut editor = state.editor.lock().await;
    if editor.store_mut().rename_board(&id, &req.title) {
        state.publish(BoardEvent::BoardsChanged {
            active_board_id: editor.store().active_board_id().map(str::to_string),
        });
    }

    editor
        .store()
        .board(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| KanbanError::NotFound(format!("Board not found: {}", id)))
}

pub async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Json<BoardsResponse> {
    let mut editor = state.editor.lock().await;

    if editor.delete_board(&id, Confirmation::from(query.confirm)) {
        tracing::info!(
            board_id = id.as_str(),
            active_board_id = editor.store().active_board_id().unwrap_or(""),
            "Board deleted"
        );
        state.publish(BoardEvent::BoardsChanged {
            active_board_id: editor.store().active_board_id().map(str::to_string),
        });
    }

    Json(BoardsResponse::from(editor.store()))
}

pub async fn select_board(
    State(state): State<AppState>,
    Json(req): Json<SelectBoardRequest>,
) -> Json<BoardsResponse> {
    let mut editor = state.editor.lock().await;

    if editor.select_board(&req.board_id) {
        state.publish(BoardEvent::BoardsChanged {
            active_board_id: Some(req.board_id.clone()),
        });
    }

    Json(BoardsResponse::from(editor.store()))
}
