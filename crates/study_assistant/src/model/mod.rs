//! Model client module for text generation
//!
//! This module provides:
//! - `client`: OpenAI-compatible model client with a chat transcript
//! - `transcript`: role-tagged turn log for the conversational mode

mod client;
mod transcript;

pub use client::{
    MessageBuilder, ModelClient, ModelConfig, CHAT_ERROR_PREFIX, DEFAULT_BASE_URL, DEFAULT_MODEL,
    GENERATION_ERROR_PREFIX,
};
pub use transcript::{ChatMessage, Role, Transcript};
