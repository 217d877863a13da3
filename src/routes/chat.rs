use axum::{Json, extract::State, extract::rejection::JsonRejection};
use base64::{Engine, engine::general_purpose};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::{ChatReply, handle_chat},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;

    let reply = match handle_chat(state.model.as_ref(), &payload.message, payload.age).await {
        Ok(reply) => reply,
        Err(err) => {
            // Every failure still answers 200 with a `response` the child can read.
            if err.is_model_failure() {
                tracing::warn!(error = %err, "chat model call failed");
            } else {
                tracing::debug!(error = %err, "chat request had nothing to answer");
            }
            return Ok(Json(ChatResponse::text(err.apology())));
        }
    };

    let response = match reply {
        ChatReply::Text(text) => ChatResponse::text(text),
        ChatReply::Picture { text, image } => ChatResponse {
            response: text,
            image: Some(general_purpose::STANDARD.encode(&image.bytes)),
            image_mime_type: Some(image.mime_type),
        },
    };

    Ok(Json(response))
}
