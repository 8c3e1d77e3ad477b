#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use async_trait::async_trait;
use tower::ServiceExt;

use kanban_editor::api::{create_router, AppState};
use kanban_editor::config::Config;
use kanban_editor::services::{AiAssistant, BoardStore, DisabledAssistant};

/// Assistant that always answers with the same suggestions.
pub struct CannedAssistant {
    pub titles: Vec<String>,
    pub description: String,
}

#[async_trait]
impl AiAssistant for CannedAssistant {
    async fn generate_tasks_for_column(&self, _: &str, _: &[String]) -> Vec<String> {
        self.titles.clone()
    }

    async fn enhance_task_description(&self, _: &str) -> String {
        self.description.clone()
    }
}

pub fn test_config() -> Arc<Config> {
    Arc::new(Config {
        port: 3000,
        frontend_dir: "../frontend/dist".to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        gemini_api_key: None,
        gemini_model: "test-model".to_string(),
        gemini_base_url: "http://localhost:9".to_string(),
        ai_timeout_secs: 1,
        seed_demo_boards: true,
    })
}

pub fn test_app(store: BoardStore, assistant: Arc<dyn AiAssistant>) -> Router {
    let config = test_config();
    let state = AppState::new(store, assistant, Arc::clone(&config));
    create_router(state, &config)
}

/// Demo boards with AI disabled.
pub fn demo_app() -> Router {
    test_app(BoardStore::with_demo_boards(), Arc::new(DisabledAssistant))
}

pub async fn make_request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri).method(method);

    if body.is_some() {
        request = request.header("content-type", "application/json");
    }

    let request = request
        .body(Body::from(body.unwrap_or_default()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    (status, body_str)
}

pub fn parse(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}

pub fn column_ids(board: &serde_json::Value) -> Vec<String> {
    board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}

pub fn task_ids(board: &serde_json::Value, column_id: &str) -> Vec<String> {
    board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == column_id)
        .map(|c| {
            c["tasks"]
                .as_array()
                .unwrap()
                .iter()
                .map(|t| t["id"].as_str().unwrap().to_string())
                .collect()
        })
        .unwrap_or_default()
}
