use axum::{extract::State, Json};

use crate::api::dto::{DragOverRequest, DragResponse, DropRequest};
use crate::api::AppState;
use crate::domain::DragIntent;
use crate::services::{BoardEvent, Editor};

pub async fn get_drag(State(state): State<AppState>) -> Json<DragResponse> {
    let editor = state.editor.lock().await;
    Json(DragResponse::from(&*editor))
}

pub async fn start_drag(
    State(state): State<AppState>,
    Json(intent): Json<DragIntent>,
) -> Json<DragResponse> {
    let mut editor = state.editor.lock().await;
    tracing::debug!(
        dragged_id = intent.id.as_str(),
        index = intent.index,
        kind = ?intent.kind,
        "Drag started"
    );
    editor.start_drag(intent);
    state.publish(BoardEvent::DragChanged);
    Json(DragResponse::from(&*editor))
}

/// Columns follow the pointer here; tasks wait for the drop.
pub async fn drag_over(
    State(state): State<AppState>,
    Json(req): Json<DragOverRequest>,
) -> Json<DragResponse> {
    let mut editor = state.editor.lock().await;
    let changed = editor.drag_over(&req.target_id, req.target_kind);
    if changed {
        publish_board_changed(&state, &editor);
        state.publish(BoardEvent::DragChanged);
    }
    Json(DragResponse::from(&*editor))
}

pub async fn drop_on_column(
    State(state): State<AppState>,
    Json(req): Json<DropRequest>,
) -> Json<DragResponse> {
    let mut editor = state.editor.lock().await;
    let was_dragging = editor.drag().intent().is_some();
    let changed = editor.drop_on(&req.target_column_id);
    if changed {
        publish_board_changed(&state, &editor);
    }
    if was_dragging {
        state.publish(BoardEvent::DragChanged);
    }
    Json(DragResponse::from(&*editor))
}

pub async fn end_drag(State(state): State<AppState>) -> Json<DragResponse> {
    let mut editor = state.editor.lock().await;
    if editor.end_drag() {
        state.publish(BoardEvent::DragChanged);
    }
    Json(DragResponse::from(&*editor))
}

fn publish_board_changed(state: &AppState, editor: &Editor) {
    if let Some(board_id) = editor.store().active_board_id() {
        state.publish(BoardEvent::BoardChanged {
            board_id: board_id.to_string(),
        });
    }
}
