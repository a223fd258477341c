use std::time::Duration;

use axum::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::CategorySet;

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_MODEL: &str = "gpt-4-turbo-preview";
pub const COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

/// External language-model capability: takes the analysis prompt, returns the
/// model's raw text response.
#[async_trait]
pub trait SeoModel: Send + Sync {
    async fn critique(&self, prompt: &str) -> AppResult<String>;
}

/// Build the critique prompt: URL, current title, and the categorized tags as
/// pretty-printed JSON, followed by the exact response schema the model must
/// return.
pub fn build_prompt(url: &str, title: &str, categories: &CategorySet) -> String {
    let tags_json =
        serde_json::to_string_pretty(categories).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"Analyze these meta tags for SEO effectiveness:

Current URL: {url}
Current Title: {title}

Meta Tags:
{tags_json}

Provide analysis in this exact JSON format:
{{
    "performance_score": 0-100,
    "weaknesses": ["list", "of", "issues"],
    "improvements": {{
        "title": "improved title",
        "standard": [
            {{"name": "description", "content": "improved content"}}
        ],
        "opengraph": [
            {{"property": "og:title", "content": "improved content"}}
        ]
    }}
}}"#
    )
}

/// Extract the first JSON object from free-form model text: the slice from
/// the first `{` to the last `}`, parsed. JSON mode is requested upstream,
/// but the response is never trusted to be bare JSON.
pub fn extract_json(text: &str) -> AppResult<serde_json::Value> {
    let start = text.find('{');
    let end = text.rfind('}');
    if let (Some(start), Some(end)) = (start, end) {
        if start < end {
            if let Ok(value) = serde_json::from_str(&text[start..=end]) {
                return Ok(value);
            }
        }
    }
    Err(AppError::Ai("No valid JSON found in AI response".into()))
}

/// OpenAI chat-completions client.
pub struct OpenAiModel {
    client: reqwest::Client,
    api_key: String,
}

impl OpenAiModel {
    pub fn new(api_key: String) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(COMPLETION_TIMEOUT)
            .build()?;
        Ok(OpenAiModel { client, api_key })
    }
}

#[async_trait]
impl SeoModel for OpenAiModel {
    async fn critique(&self, prompt: &str) -> AppResult<String> {
        let body = serde_json::json!({
            "model": OPENAI_MODEL,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": 0.2,
            "response_format": {"type": "json_object"},
        });

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to contact OpenAI API");
                AppError::Ai(format!("could not reach model API: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "OpenAI API returned error");
            return Err(AppError::Ai(format!("model API returned {status}: {detail}")));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Ai(format!("could not parse model API response: {e}")))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Ai("model API response had no completion text".into()))
    }
}
