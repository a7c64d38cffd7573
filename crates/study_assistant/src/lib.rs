//! study_assistant: AI-powered study companion
//!
//! This library provides the core of the smart study assistant:
//! - A client for a hosted text-generation model (single-shot and chat)
//! - An in-memory chat transcript for the conversational mode
//! - Prompt templates for the study features
//! - A high-level assistant facade consumed by the CLI
//!
//! # Example
//!
//! ```no_run
//! use study_assistant::{ModelConfig, StudyAssistant};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ModelConfig::new("your-api-key");
//!     let mut assistant = StudyAssistant::new(config);
//!
//!     let answer = assistant.explain_concept("recursion").await;
//!     println!("{}", answer);
//! }
//! ```

// Core modules
pub mod error;

// Configuration module
pub mod config;

// Core functionality
pub mod assistant;
pub mod model;

// Re-export commonly used types and functions
pub use error::{AssistantError, Result};

// Config re-exports
pub use config::{
    chat_prompt, explain_prompt, plan_prompt, quiz_prompt, summarize_prompt, tips_prompt,
    Difficulty, SYSTEM_CONTEXT,
};

// Model re-exports
pub use model::{
    ChatMessage, MessageBuilder, ModelClient, ModelConfig, Role, Transcript, CHAT_ERROR_PREFIX,
    DEFAULT_BASE_URL, DEFAULT_MODEL, GENERATION_ERROR_PREFIX,
};

// Assistant re-exports
pub use assistant::StudyAssistant;
