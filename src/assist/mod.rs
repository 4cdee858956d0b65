//! Generative-text upstream client for the admin writing assistant.
//!
//! The admin panel's AI modal drafts news copy and descriptions. The
//! upstream model catalogue shifts between API keys, so the client first
//! lists the models available to this key and picks one that supports
//! content generation instead of hardcoding a model name.

use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;

/// Preferred model-name fragment during discovery.
const PREFERRED_MODEL: &str = "gemini-1.5-flash";
/// Fallback model-name fragment; any generation-capable match is accepted.
const FALLBACK_MODEL: &str = "gemini";
/// Generation method a discovered model must support.
const GENERATE_METHOD: &str = "generateContent";

/// Result of a successful generation call.
#[derive(Debug, Clone)]
pub struct AssistOutcome {
    pub text: String,
    pub used_model: String,
}

/// One entry of the upstream model catalogue.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelInfo {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

/// Upstream model-list response.
#[derive(Debug, Clone, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

/// Upstream generation response, reduced to the fields we extract.
#[derive(Debug, Clone, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Deserialize)]
struct Part {
    text: Option<String>,
}

/// HTTP client for the generative-text upstream.
pub struct AssistClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl AssistClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Generate text for a prompt: discover a usable model, then call it.
    pub async fn generate(&self, prompt: &str) -> Result<AssistOutcome, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Internal(
                "Generative API key is not configured (YILDIRIM_GENAI_API_KEY)".to_string(),
            )
        })?;

        let model = self.discover_model(api_key).await?;
        tracing::info!("Selected generative model: {}", model);

        let url = format!(
            "{}/models/{}:{}?key={}",
            self.base_url, model, GENERATE_METHOD, api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "Generation failed ({}): {} {}",
                model, status, detail
            )));
        }

        let generated: GenerateResponse = response.json().await?;
        let text = generated
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.clone())
            .ok_or_else(|| {
                AppError::Upstream("Upstream returned success but no text content".to_string())
            })?;

        Ok(AssistOutcome {
            text,
            used_model: model,
        })
    }

    /// List the models available to this key and pick the first one that
    /// supports content generation, preferring the flash tier.
    async fn discover_model(&self, api_key: &str) -> Result<String, AppError> {
        let url = format!("{}/models?key={}", self.base_url, api_key);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "Failed to list models: {} {}",
                status, detail
            )));
        }

        let list: ModelList = response.json().await?;

        let chosen = pick_model(&list.models, PREFERRED_MODEL)
            .or_else(|| pick_model(&list.models, FALLBACK_MODEL))
            .ok_or_else(|| {
                AppError::Upstream("No compatible generative model found for this API key".to_string())
            })?;

        // Catalogue names come back as "models/<name>"; strip the prefix.
        Ok(chosen
            .name
            .rsplit('/')
            .next()
            .unwrap_or(&chosen.name)
            .to_string())
    }
}

fn pick_model<'a>(models: &'a [ModelInfo], fragment: &str) -> Option<&'a ModelInfo> {
    models.iter().find(|m| {
        m.name.contains(fragment)
            && m.supported_generation_methods
                .iter()
                .any(|method| method == GENERATE_METHOD)
    })
}
