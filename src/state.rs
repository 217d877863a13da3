// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::GeminiClient;
use crate::services::model::GenerativeModel;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub model: Arc<dyn GenerativeModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(GeminiClient::new(config)))
    }
}
