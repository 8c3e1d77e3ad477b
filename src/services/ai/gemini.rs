use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;

use super::{description_prompt, task_generation_prompt, AiAssistant, DESCRIPTION_PLACEHOLDER};

#[derive(Debug, thiserror::Error)]
enum GeminiError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("response contained no text")]
    EmptyResponse,

    #[error("malformed task list: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Debug, Default, Deserialize)]
struct GeneratedTasks {
    #[serde(default)]
    tasks: Vec<String>,
}

/// [`AiAssistant`] backed by the Gemini `generateContent` REST endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(
        http_client: reqwest::Client,
        api_key: Option<String>,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(http_client: reqwest::Client, config: &Config) -> Self {
        Self::new(
            http_client,
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            Duration::from_secs(config.ai_timeout_secs),
        )
    }

    async fn generate(&self, prompt: &str, generation_config: Option<Value>) -> Result<String, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;

        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        if let Some(config) = generation_config {
            body["generationConfig"] = config;
        }

        let response = self
            .http_client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeminiError::Status(response.status()));
        }

        let parsed = response.json::<GenerateContentResponse>().await?;
        parsed.text().ok_or(GeminiError::EmptyResponse)
    }

    async fn try_generate_tasks(
        &self,
        column_title: &str,
        existing_task_titles: &[String],
    ) -> Result<Vec<String>, GeminiError> {
        let prompt = task_generation_prompt(column_title, existing_task_titles);
        let schema = json!({
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "tasks": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    }
                }
            }
        });

        let text = self.generate(&prompt, Some(schema)).await?;
        let generated: GeneratedTasks = serde_json::from_str(&text)?;
        Ok(generated
            .tasks
            .into_iter()
            .filter(|t| !t.trim().is_empty())
            .collect())
    }
}

#[async_trait]
impl AiAssistant for GeminiClient {
    async fn generate_tasks_for_column(
        &self,
        column_title: &str,
        existing_task_titles: &[String],
    ) -> Vec<String> {
        match self.try_generate_tasks(column_title, existing_task_titles).await {
            Ok(tasks) => {
                tracing::debug!(column_title, count = tasks.len(), "Generated tasks");
                tasks
            }
            Err(e) => {
                tracing::warn!(column_title, error = %e, "Gemini task generation failed");
                Vec::new()
            }
        }
    }

    async fn enhance_task_description(&self, task_content: &str) -> String {
        match self.generate(&description_prompt(task_content), None).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(task_content, error = %e, "Gemini description failed");
                DESCRIPTION_PLACEHOLDER.to_string()
            }
        }
    }
}
