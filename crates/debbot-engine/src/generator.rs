//! The response generator boundary.
//!
//! The panel hands the generator the visitor's latest message and always
//! gets display text back. [`GeminiGenerator`] talks to the Google
//! Generative Language API; any fault on that path (missing key, network,
//! quota, malformed response) is logged and turned into [`FALLBACK_REPLY`]
//! before it reaches the panel.

use crate::config::Config;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Shown in place of a reply when no useful reply is available.
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// A source of reply text for the chat panel.
///
/// Implementations never fail: whatever happens internally, the returned
/// string must be suitable for display as an assistant message.
pub trait ResponseGenerator {
    /// Produce a reply for the visitor's latest message.
    fn generate(&self, prompt: &str) -> impl Future<Output = String>;
}

/// Generator backed by the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    http: reqwest::Client,
    config: Config,
    system_prompt: String,
    api_key: Option<String>,
}

impl GeminiGenerator {
    /// Build a generator from the config and the portfolio profile.
    ///
    /// The profile becomes the system instruction; the API key is resolved
    /// once here (environment over config file).
    pub fn new(config: Config, profile: &Profile) -> Result<Self, GeneratorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(GeneratorError::ClientBuild)?;
        let api_key = config.resolve_api_key();

        Ok(Self {
            http,
            config,
            system_prompt: profile.system_prompt(),
            api_key,
        })
    }

    /// Whether an API key was resolved at construction.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The fallible request path. Faults stay internal; `generate`
    /// converts them to the fallback reply.
    async fn request(&self, prompt: &str) -> Result<String, GeneratorError> {
        let key = self.api_key.as_deref().ok_or(GeneratorError::MissingApiKey)?;
        let url = format!("{API_BASE}/{}:generateContent?key={key}", self.config.model);

        let body = ApiRequest {
            system_instruction: Instruction {
                parts: vec![Part { text: &self.system_prompt }],
            },
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(GeneratorError::Request)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(GeneratorError::Request)?;

        if status != 200 {
            return Err(GeneratorError::Api { status, body: text });
        }

        parse_reply(&text)
    }
}

impl ResponseGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> String {
        debug!(model = %self.config.model, "dispatching generate request");

        match self.request(prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "response generation failed, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

// === Wire types ===

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    system_instruction: Instruction<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Instruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    // Safety-blocked candidates carry a finishReason but no content.
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

/// Extract the reply text from a `generateContent` response body.
///
/// Pure over the JSON so the parsing is testable without a network.
fn parse_reply(json: &str) -> Result<String, GeneratorError> {
    let api: ApiResponse =
        serde_json::from_str(json).map_err(|e| GeneratorError::Parse(e.to_string()))?;

    let text: String = api
        .candidates
        .into_iter()
        .next()
        .map(|c| {
            c.content
                .parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(GeneratorError::EmptyReply);
    }
    Ok(text)
}

/// Internal faults on the generation path.
///
/// Never crosses the trait surface: `generate` converts every variant
/// into [`FALLBACK_REPLY`].
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// No API key in the environment or the config file.
    #[error("no API key configured (set GEMINI_API_KEY or add api_key to the config)")]
    MissingApiKey,

    /// HTTP client construction failed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Request could not be sent or the response body not read.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Non-200 response from the API.
    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body was not the expected JSON shape.
    #[error("could not parse response: {0}")]
    Parse(String),

    /// Structurally valid response with no reply text.
    #[error("response contained no reply text")]
    EmptyReply,
}
