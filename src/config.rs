// src/config.rs
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-exp-image-generation";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub bind_addr: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let api_key = get("GEMINI_API_KEY", "");
        if api_key.is_empty() {
            tracing::warn!("GEMINI_API_KEY is not set, model calls will fail");
        }

        Self {
            api_key,
            base_url: get("GEMINI_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            text_model: get("GEMINI_TEXT_MODEL", DEFAULT_TEXT_MODEL),
            image_model: get("GEMINI_IMAGE_MODEL", DEFAULT_IMAGE_MODEL),
            bind_addr: get("BIND_ADDR", DEFAULT_BIND_ADDR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg.api_key, "");
        assert_eq!(cfg.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(cfg.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn overrides_are_read_and_trimmed() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("GEMINI_API_KEY", " abc "),
            ("GEMINI_BASE_URL", "http://localhost:9999/v1/"),
            ("GEMINI_TEXT_MODEL", ""),
            ("BIND_ADDR", "127.0.0.1:3000"),
        ]);
        let cfg = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.api_key, "abc");
        assert_eq!(cfg.base_url, "http://localhost:9999/v1");
        assert_eq!(cfg.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(cfg.bind_addr, "127.0.0.1:3000");
    }

    #[test]
    fn debug_hides_api_key() {
        let cfg = Config::from_lookup(|k| (k == "GEMINI_API_KEY").then(|| "secret".to_string()));
        assert!(!format!("{cfg:?}").contains("secret"));
    }
}
