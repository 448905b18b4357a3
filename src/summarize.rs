use std::future::Future;

use log::debug;
use reqwest::StatusCode;

use crate::prompt::{SummaryType, build_prompt};
use crate::{Error, Result, Transcript};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Capability boundary to the generative model: submit a prompt, receive the
/// response text. Lets the orchestration run against a substitute provider
/// (or a mock in tests) without touching the pipeline.
pub trait LanguageModel {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Summarize a transcript: build the prompt for the selected style and hand
/// it to the model. One call, no retries.
pub async fn summarize<M: LanguageModel>(
    model: &M,
    transcript: &Transcript,
    summary_type: SummaryType,
    instructions: Option<&str>,
) -> Result<String> {
    let prompt = build_prompt(transcript, summary_type, instructions);
    debug!(
        "Requesting {summary_type} summary for video {} ({} chars of transcript)",
        transcript.video_id, transcript.stats.chars
    );
    model.generate(&prompt).await
}

/// Gemini `generateContent` client. The Google Search tool is enabled on
/// every request so the model may pull supplementary context on its own.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, api_key: String, model: String) -> Self {
        GeminiClient {
            client,
            base_url: GEMINI_BASE_URL.to_string(),
            api_key,
            model,
        }
    }
}

impl LanguageModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        debug!("Calling Gemini model {}", self.model);

        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ],
            "tools": [
                { "google_search": {} }
            ]
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        let json: serde_json::Value = resp.json().await?;
        extract_gemini_text(&json)
    }
}

fn api_error(status: StatusCode, body: String) -> Error {
    if status == StatusCode::TOO_MANY_REQUESTS {
        Error::QuotaExceeded(body)
    } else {
        Error::ModelApi(format!("Gemini API returned {status}: {body}"))
    }
}

fn extract_gemini_text(json: &serde_json::Value) -> Result<String> {
    if let Some(parts) = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
    {
        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text")?.as_str().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    Err(Error::ModelApi("unexpected Gemini API response format".to_string()))
}
