//! # Gemini Extractor
//!
//! Network-backed extractor calling the Gemini `generateContent` endpoint.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  free text                                                              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  prompt (strict-JSON instructions + the text)                           │
//! │     │                                                                   │
//! │     ▼  POST /v1beta/models/{model}:generateContent                      │
//! │  candidates[0].content.parts[0].text                                    │
//! │     │                                                                   │
//! │     ▼  strip ```json fences, parse                                      │
//! │  ExtractedOrder                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The HTTP client carries a hard timeout, so a hung request fails in
//! bounded time even without the fallback wrapper on top.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contract::{ExtractedOrder, OrderExtractor};
use crate::error::{ExtractionError, ExtractionResult};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

// =============================================================================
// Extractor
// =============================================================================

/// Extractor backed by the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiExtractor {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiExtractor {
    /// Creates an extractor with the default model and timeout.
    pub fn new(api_key: impl Into<String>) -> ExtractionResult<Self> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Creates an extractor with an explicit request timeout.
    pub fn with_timeout(
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> ExtractionResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(GeminiExtractor {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base URL (used to point tests at a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn prompt(text: &str) -> String {
        format!(
            "You convert a pasted customer message into a structured sales order.\n\
             Reply with ONLY a JSON object, no prose, using exactly this shape:\n\
             {{\"customerName\": string or null,\n \
               \"items\": [{{\"name\": string, \"quantity\": integer, \"price\": integer}}],\n \
               \"totalAmount\": integer,\n \
               \"source\": one of \"WhatsApp\", \"Instagram\", \"Facebook\", \"TikTok\", \"Walk-in\", \"Phone Call\", \"Other\", or null}}\n\
             All prices are in the smallest currency unit (e.g. kobo: multiply whole amounts by 100).\n\
             Message:\n{text}"
        )
    }
}

/// Pulls the JSON object out of a model reply, tolerating ``` fences.
fn parse_extraction_text(text: &str) -> ExtractionResult<ExtractedOrder> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(body).map_err(|e| ExtractionError::Malformed(e.to_string()))
}

#[async_trait]
impl OrderExtractor for GeminiExtractor {
    async fn extract_order(&self, text: &str) -> ExtractionResult<ExtractedOrder> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let prompt = Self::prompt(text);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        debug!(model = %self.model, chars = text.len(), "extraction request");

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ExtractionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        let reply = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| {
                ExtractionError::Malformed("response contains no candidates".to_string())
            })?;

        parse_extraction_text(reply)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
