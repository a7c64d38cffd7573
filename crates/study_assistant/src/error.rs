//! Error types for study assistant operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Model request failed: {0}")]
    Api(#[from] async_openai::error::OpenAIError),

    #[error("Model returned an empty response")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, AssistantError>;
