// src/message.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_GOALS: &str = "General learning";

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub age: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    /// Generated picture, base64 (standard alphabet, padded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_mime_type: Option<String>,
}

impl ChatResponse {
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            image: None,
            image_mime_type: None,
        }
    }
}

#[derive(Deserialize)]
pub struct ScheduleRequest {
    pub age: u32,
    pub subjects: Vec<String>,
    #[serde(default)]
    pub goals: Option<String>,
}

impl ScheduleRequest {
    pub fn goals(&self) -> &str {
        match self.goals.as_deref() {
            Some(g) if !g.trim().is_empty() => g.trim(),
            _ => DEFAULT_GOALS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
