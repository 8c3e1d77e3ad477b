use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::{AiStatusResponse, EnhanceResponse, GenerateResponse};
use crate::api::AppState;

pub async fn generate_tasks(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
) -> Json<GenerateResponse> {
    let created = state.ai.generate_tasks(&column_id).await;

    let editor = state.editor.lock().await;
    Json(GenerateResponse {
        created,
        board: editor.store().active_board().cloned(),
    })
}

pub async fn enhance_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Json<EnhanceResponse> {
    let outcome = state.ai.enhance_task(&task_id).await;

    let editor = state.editor.lock().await;
    Json(EnhanceResponse {
        applied: outcome.as_ref().is_some_and(|o| o.applied),
        description: outcome.map(|o| o.description),
        board: editor.store().active_board().cloned(),
    })
}

pub async fn ai_status(State(state): State<AppState>) -> Json<AiStatusResponse> {
    let editor = state.editor.lock().await;
    Json(AiStatusResponse {
        enabled: state.config.gemini_api_key.is_some(),
        loading: editor.ai_loading().cloned(),
    })
}
