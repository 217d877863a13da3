// src/services/mod.rs
pub mod chatbot;
pub mod gemini;
pub mod model;
pub mod prompts;
pub mod scheduler;
