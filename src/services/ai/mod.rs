//! AI assistance for boards: generating task titles for a column and writing
//! task descriptions.
//!
//! Implementations never fail towards the caller. Problems are logged and the
//! result degrades to an empty list or [`DESCRIPTION_PLACEHOLDER`].

pub mod gemini;

use async_trait::async_trait;

pub use gemini::GeminiClient;

pub const DESCRIPTION_PLACEHOLDER: &str = "Could not generate description.";

#[async_trait]
pub trait AiAssistant: Send + Sync {
    /// Suggest new task titles for a column. Empty on any failure.
    async fn generate_tasks_for_column(
        &self,
        column_title: &str,
        existing_task_titles: &[String],
    ) -> Vec<String>;

    /// Write a description for a task. [`DESCRIPTION_PLACEHOLDER`] on any failure.
    async fn enhance_task_description(&self, task_content: &str) -> String;
}

/// Assistant used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAssistant;

#[async_trait]
impl AiAssistant for DisabledAssistant {
    async fn generate_tasks_for_column(&self, column_title: &str, _: &[String]) -> Vec<String> {
        tracing::warn!(column_title, "AI task generation requested but no API key is configured");
        Vec::new()
    }

    async fn enhance_task_description(&self, _: &str) -> String {
        tracing::warn!("AI description requested but no API key is configured");
        DESCRIPTION_PLACEHOLDER.to_string()
    }
}

pub fn task_generation_prompt(column_title: &str, existing_task_titles: &[String]) -> String {
    format!(
        "I am managing a Kanban board. I have a column named \"{}\".\n\
         Current tasks in this context include: {}.\n\
         Generate 3 distinct, relevant, and actionable new tasks for this column.\n\
         Return only the task titles as a list of strings.",
        column_title,
        existing_task_titles.join(", ")
    )
}

pub fn description_prompt(task_content: &str) -> String {
    format!(
        "Write a concise but professional description for a project task titled: \"{}\".\n\
         Include a checklist of 3 sub-steps.\n\
         Return plain text with markdown formatting.",
        task_content
    )
}
