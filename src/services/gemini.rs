// src/services/gemini.rs
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use super::model::{GeneratedImage, GenerativeModel, ModelError, ResponseFormat};
use crate::config::Config;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<&'static str>>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Client for the Generative Language `generateContent` endpoint.
pub struct GeminiClient {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            http_client: HttpClient::new(),
            base_url: config.base_url.clone(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateRequest<'_>,
    ) -> Result<GenerateResponse, ModelError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(model, status = status.as_u16(), "model call failed");
            return Err(api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ModelError::Decode(e.to_string()))
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_text(
        &self,
        prompt: &str,
        format: ResponseFormat,
    ) -> Result<String, ModelError> {
        let generation_config = match format {
            ResponseFormat::Json => Some(GenerationConfig {
                response_mime_type: Some(format.mime_type()),
                ..Default::default()
            }),
            ResponseFormat::Text => None,
        };
        let request = GenerateRequest {
            contents: vec![user_content(prompt)],
            generation_config,
        };

        let response = self.generate_content(&self.text_model, &request).await?;
        extract_text(response)
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ModelError> {
        let request = GenerateRequest {
            contents: vec![user_content(prompt)],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["TEXT", "IMAGE"]),
                ..Default::default()
            }),
        };

        let response = self.generate_content(&self.image_model, &request).await?;
        extract_image(response)
    }
}

fn user_content(prompt: &str) -> Content<'_> {
    Content {
        role: "user",
        parts: vec![TextPart { text: prompt }],
    }
}

fn api_error(status: u16, body: &str) -> ModelError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    ModelError::Api { status, message }
}

fn first_parts(response: GenerateResponse) -> Vec<Part> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .unwrap_or_default()
}

fn extract_text(response: GenerateResponse) -> Result<String, ModelError> {
    let text: String = first_parts(response)
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        return Err(ModelError::EmptyResponse);
    }
    Ok(text)
}

fn extract_image(response: GenerateResponse) -> Result<GeneratedImage, ModelError> {
    let mut text = String::new();
    let mut image = None;

    for part in first_parts(response) {
        if let Some(t) = part.text {
            text.push_str(&t);
        }
        if image.is_none() {
            image = part.inline_data;
        }
    }

    let inline = image.ok_or(ModelError::MissingImage)?;
    let bytes = general_purpose::STANDARD
        .decode(inline.data.as_bytes())
        .map_err(|e| ModelError::Decode(e.to_string()))?;

    Ok(GeneratedImage {
        text: text.trim().to_string(),
        mime_type: inline.mime_type,
        bytes,
    })
}
