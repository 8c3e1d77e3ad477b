use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{LoadingScope, Task};

use super::ai::AiAssistant;
use super::events::{BoardEvent, EventBus};
use super::Editor;

/// Result of applying an AI description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enhancement {
    pub description: String,
    /// False when the task disappeared while the request was in flight.
    pub applied: bool,
}

/// Issues AI requests for the active board and applies the answers to
/// whatever the board looks like when they arrive.
///
/// The editor lock is never held across the request. Targets are looked up
/// again by id once the answer is in; if they are gone the answer is dropped.
#[derive(Clone)]
pub struct AiService {
    editor: Arc<Mutex<Editor>>,
    assistant: Arc<dyn AiAssistant>,
    events: EventBus,
}

impl AiService {
    pub fn new(editor: Arc<Mutex<Editor>>, assistant: Arc<dyn AiAssistant>, events: EventBus) -> Self {
        Self {
            editor,
            assistant,
            events,
        }
    }

    /// Generate tasks for a column of the active board. Returns the tasks that
    /// were actually added.
    pub async fn generate_tasks(&self, column_id: &str) -> Vec<Arc<Task>> {
        let scope = LoadingScope::column(column_id);

        let (board_id, column_title, existing) = {
            let mut editor = self.editor.lock().await;
            let Some(board) = editor.store().active_board() else {
                return Vec::new();
            };
            let Some(column) = board.column(column_id) else {
                tracing::debug!(column_id, "Task generation for unknown column ignored");
                return Vec::new();
            };
            let request = (board.id.clone(), column.title.clone(), column.task_titles());
            editor.begin_ai(scope.clone());
            request
        };
        self.publish_loading(Some(scope.clone()));

        tracing::info!(board_id = board_id.as_str(), column_id, "Requesting AI task generation");
        let titles = self
            .assistant
            .generate_tasks_for_column(&column_title, &existing)
            .await;

        let (created, loading) = {
            let mut editor = self.editor.lock().await;
            let created = editor
                .store_mut()
                .append_generated_tasks(&board_id, column_id, &titles);
            editor.finish_ai(&scope);
            (created, editor.ai_loading().cloned())
        };

        if created.is_empty() {
            tracing::debug!(
                column_id,
                suggested = titles.len(),
                "No generated tasks applied"
            );
        } else {
            self.events.publish(&BoardEvent::BoardChanged { board_id });
        }
        self.publish_loading(loading);

        created
    }

    /// Write a description for a task of the active board. Returns `None` when
    /// the task is not on the active board at request time.
    pub async fn enhance_task(&self, task_id: &str) -> Option<Enhancement> {
        let scope = LoadingScope::Global;

        let (board_id, content) = {
            let mut editor = self.editor.lock().await;
            let board = editor.store().active_board()?;
            let Some((_, task)) = board.find_task(task_id) else {
                tracing::debug!(task_id, "Description request for unknown task ignored");
                return None;
            };
            let request = (board.id.clone(), task.content.clone());
            editor.begin_ai(scope.clone());
            request
        };
        self.publish_loading(Some(scope.clone()));

        tracing::info!(board_id = board_id.as_str(), task_id, "Requesting AI description");
        let description = self.assistant.enhance_task_description(&content).await;

        let (applied, loading) = {
            let mut editor = self.editor.lock().await;
            let applied = editor
                .store_mut()
                .set_description(&board_id, task_id, &description);
            editor.finish_ai(&scope);
            (applied, editor.ai_loading().cloned())
        };

        if applied {
            self.events.publish(&BoardEvent::BoardChanged { board_id });
        } else {
            tracing::debug!(task_id, "Task removed before description arrived");
        }
        self.publish_loading(loading);

        Some(Enhancement {
            description,
            applied,
        })
    }

    fn publish_loading(&self, loading: Option<LoadingScope>) {
        self.events.publish(&BoardEvent::AiStatusChanged { loading });
    }
}
