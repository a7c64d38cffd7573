//! Model client for text generation using an OpenAI-compatible API

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse,
    },
    Client,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AssistantError, Result};
use crate::model::transcript::{ChatMessage, Role, Transcript};

/// Default endpoint: the Gemini OpenAI-compatibility API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default model variant
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Marker prefixed to failures rendered as inline text by `generate_text`
pub const GENERATION_ERROR_PREFIX: &str = "Error generating response: ";

/// Marker prefixed to failures rendered as inline text by `chat_text`
pub const CHAT_ERROR_PREFIX: &str = "Error in chat: ";

/// Configuration for the generation model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub base_url: String,
    pub api_key: String,
    pub model_name: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ModelConfig {
    /// Create a new ModelConfig with the required API key and default
    /// generation settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model_name: DEFAULT_MODEL.to_string(),
            max_tokens: 2048,
            temperature: 0.7,
        }
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model variant
    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Set the maximum number of output tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature (meaningful range 0.0 to 2.0)
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Client for the hosted text-generation service
///
/// Owns the API configuration and the transcript backing the conversational
/// mode. Construction performs no network IO; every request is sent lazily
/// by `generate` or `chat`.
pub struct ModelClient {
    config: ModelConfig,
    client: Client<OpenAIConfig>,
    history: Transcript,
}

impl ModelClient {
    /// Create a new ModelClient with an empty transcript
    pub fn new(config: ModelConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(&config.base_url)
            .with_api_key(&config.api_key);

        let client = Client::with_config(openai_config);

        Self {
            config,
            client,
            history: Transcript::new(),
        }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// The internal chat transcript
    pub fn history(&self) -> &Transcript {
        &self.history
    }

    /// Generate text for a single prompt
    ///
    /// Stateless: the internal transcript is neither consulted nor modified.
    /// The response text is returned verbatim.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model_name)
            .max_tokens(self.config.max_tokens)
            .temperature(self.config.temperature)
            .messages(vec![MessageBuilder::user(prompt)])
            .build()?;

        debug!("Sending generation request to {}", self.config.model_name);
        let response = self.client.chat().create(request).await?;
        extract_text(response)
    }

    /// Generate text, rendering any failure as an inline error string
    pub async fn generate_text(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(text) => text,
            Err(e) => format!("{}{}", GENERATION_ERROR_PREFIX, e),
        }
    }

    /// Run one chat turn against the accumulated history
    ///
    /// The message is appended to the transcript as a `user` entry before the
    /// request is sent, and the reply is appended as a `model` entry on
    /// success. When the request fails the `user` entry stays in place,
    /// leaving an unanswered turn in the transcript.
    ///
    /// Passing `history` operates on the caller-supplied transcript and
    /// bypasses the internal one entirely.
    pub async fn chat(
        &mut self,
        message: &str,
        history: Option<&mut Transcript>,
    ) -> Result<String> {
        let transcript = match history {
            Some(transcript) => transcript,
            None => &mut self.history,
        };

        transcript.push(ChatMessage::user(message));

        let messages: Vec<ChatCompletionRequestMessage> = transcript
            .entries()
            .iter()
            .map(MessageBuilder::from_entry)
            .collect();

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model_name)
            .max_tokens(self.config.max_tokens)
            .temperature(self.config.temperature)
            .messages(messages)
            .build()?;

        debug!(
            "Sending chat turn {} to {}",
            transcript.len(),
            self.config.model_name
        );
        let response = self.client.chat().create(request).await?;
        let reply = extract_text(response)?;

        transcript.push(ChatMessage::model(&reply));
        Ok(reply)
    }

    /// Run one chat turn, rendering any failure as an inline error string
    pub async fn chat_text(&mut self, message: &str, history: Option<&mut Transcript>) -> String {
        match self.chat(message, history).await {
            Ok(text) => text,
            Err(e) => format!("{}{}", CHAT_ERROR_PREFIX, e),
        }
    }

    /// Clear the internal chat transcript
    ///
    /// Externally supplied transcripts are unaffected.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Pull the reply text out of a completion response
fn extract_text(response: CreateChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(AssistantError::EmptyResponse)
}

/// Helper for converting transcript entries to wire messages
pub struct MessageBuilder;

impl MessageBuilder {
    /// Create a user message
    pub fn user(content: &str) -> ChatCompletionRequestMessage {
        ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .unwrap()
            .into()
    }

    /// Create a model message (assistant role on the wire)
    pub fn model(content: &str) -> ChatCompletionRequestMessage {
        ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()
            .unwrap()
            .into()
    }

    /// Convert a transcript entry to its wire representation
    pub fn from_entry(entry: &ChatMessage) -> ChatCompletionRequestMessage {
        match entry.role {
            Role::User => Self::user(&entry.content),
            Role::Model => Self::model(&entry.content),
        }
    }
}
