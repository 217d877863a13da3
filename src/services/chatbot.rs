// src/services/chatbot.rs
use thiserror::Error;

use super::model::{GeneratedImage, GenerativeModel, ModelError, ResponseFormat};
use super::prompts::tutor_prompt;

pub const IMAGINE_MARKER: &str = "/imagine";
pub const PICTURE_REPLY: &str = "Here is your picture! 🎨";

#[derive(Debug, PartialEq, Eq)]
pub enum Intent<'a> {
    Explain(&'a str),
    Imagine(&'a str),
}

pub fn detect_intent(msg: &str) -> Intent<'_> {
    let msg = msg.trim();

    match msg.get(..IMAGINE_MARKER.len()) {
        Some(head) if head.eq_ignore_ascii_case(IMAGINE_MARKER) => {
            Intent::Imagine(msg[IMAGINE_MARKER.len()..].trim())
        }
        _ => Intent::Explain(msg),
    }
}

#[derive(Debug)]
pub enum ChatReply {
    Text(String),
    Picture { text: String, image: GeneratedImage },
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Tell me what to draw after /imagine")]
    EmptyImagePrompt,
    #[error(transparent)]
    Explain(ModelError),
    #[error(transparent)]
    Imagine(ModelError),
}

impl ChatError {
    /// Child-facing reply text for any failure.
    pub fn apology(&self) -> String {
        match self {
            ChatError::EmptyMessage => {
                "Hmm, I didn't hear a question! Ask me anything 😊".to_string()
            }
            ChatError::EmptyImagePrompt => "Tell me what to draw after /imagine! 🖍️".to_string(),
            ChatError::Explain(e) => format!("Oops! Something went wrong 🤖💥 ({e})"),
            ChatError::Imagine(e) => format!("I couldn't draw that right now! 🖍️ ({e})"),
        }
    }

    pub fn is_model_failure(&self) -> bool {
        matches!(self, ChatError::Explain(_) | ChatError::Imagine(_))
    }
}

pub async fn handle_chat(
    model: &dyn GenerativeModel,
    message: &str,
    age: u32,
) -> Result<ChatReply, ChatError> {
    match detect_intent(message) {
        Intent::Explain("") => Err(ChatError::EmptyMessage),
        Intent::Imagine("") => Err(ChatError::EmptyImagePrompt),

        Intent::Explain(question) => {
            tracing::info!(age, "explain request");
            let text = model
                .generate_text(&tutor_prompt(age, question), ResponseFormat::Text)
                .await
                .map_err(ChatError::Explain)?;
            Ok(ChatReply::Text(text))
        }

        Intent::Imagine(prompt) => {
            tracing::info!(age, "image request");
            let image = model
                .generate_image(prompt)
                .await
                .map_err(ChatError::Imagine)?;

            let text = if image.text.is_empty() {
                PICTURE_REPLY.to_string()
            } else {
                format!("{PICTURE_REPLY}\n{}", image.text)
            };
            Ok(ChatReply::Picture { text, image })
        }
    }
}
