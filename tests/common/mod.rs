#![allow(dead_code)]

use async_trait::async_trait;
use kidzie_backend::services::model::{
    GeneratedImage, GenerativeModel, ModelError, ResponseFormat,
};
use std::sync::Mutex;

/// Scripted stand-in for the hosted model; records every prompt it sees.
#[derive(Default)]
pub struct MockModel {
    text: Option<String>,
    image: Option<GeneratedImage>,
    pub prompts: Mutex<Vec<(String, Option<ResponseFormat>)>>,
}

impl MockModel {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn drawing(bytes: Vec<u8>) -> Self {
        Self {
            image: Some(GeneratedImage {
                text: String::new(),
                mime_type: "image/png".to_string(),
                bytes,
            }),
            ..Default::default()
        }
    }

    /// Every call fails with a network error.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn last_prompt(&self) -> Option<(String, Option<ResponseFormat>)> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate_text(
        &self,
        prompt: &str,
        format: ResponseFormat,
    ) -> Result<String, ModelError> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), Some(format)));
        self.text
            .clone()
            .ok_or_else(|| ModelError::Network("upstream unreachable".to_string()))
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ModelError> {
        self.prompts.lock().unwrap().push((prompt.to_string(), None));
        self.image
            .clone()
            .ok_or_else(|| ModelError::Network("upstream unreachable".to_string()))
    }
}

pub fn week_json() -> String {
    serde_json::json!({
        "Monday": [{
            "time": "9:00 AM",
            "subject": "Math",
            "topic": "Adding with blocks",
            "duration": "20 min",
            "color": "kidzie-blue"
        }],
        "Tuesday": [{
            "time": "10:00 AM",
            "subject": "Science",
            "topic": "Why leaves change color",
            "duration": "25 min",
            "color": "kidzie-green"
        }],
        "Wednesday": [],
        "Thursday": [],
        "Friday": [],
        "Saturday": [],
        "Sunday": []
    })
    .to_string()
}
