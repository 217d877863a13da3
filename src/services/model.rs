// src/services/model.rs
use async_trait::async_trait;
use thiserror::Error;

/// Output constraint passed along with a text prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Text,
    Json,
}

impl ResponseFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ResponseFormat::Text => "text/plain",
            ResponseFormat::Json => "application/json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Caption text returned alongside the picture, possibly empty.
    pub text: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network error: {0}")]
    Network(String),
    #[error("model API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("model returned no content")]
    EmptyResponse,
    #[error("model returned no image")]
    MissingImage,
    #[error("could not decode model response: {0}")]
    Decode(String),
}

/// A hosted generative model: text prompt in, text or image out.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_text(
        &self,
        prompt: &str,
        format: ResponseFormat,
    ) -> Result<String, ModelError>;

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ModelError>;
}
