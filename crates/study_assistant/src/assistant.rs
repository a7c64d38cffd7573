//! High-level study assistant built on the model client

use crate::config::{
    chat_prompt, explain_prompt, plan_prompt, quiz_prompt, summarize_prompt, tips_prompt,
    Difficulty,
};
use crate::model::{ModelClient, ModelConfig};

/// Study assistant that provides the study features backed by the hosted
/// generation model
///
/// Every feature builds a prompt and passes it through to the model; the
/// returned markdown (or inline error string) is handed back unchanged.
pub struct StudyAssistant {
    client: ModelClient,
}

impl StudyAssistant {
    /// Create a new StudyAssistant from the given model configuration
    pub fn new(config: ModelConfig) -> Self {
        Self {
            client: ModelClient::new(config),
        }
    }

    /// Have a conversational turn with the assistant
    ///
    /// Context accumulates in the client transcript across calls.
    pub async fn chat(&mut self, message: &str) -> String {
        self.client.chat_text(&chat_prompt(message), None).await
    }

    /// Get a clear explanation of a concept
    pub async fn explain_concept(&self, concept: &str) -> String {
        self.client.generate_text(&explain_prompt(concept)).await
    }

    /// Generate a quiz on a specific topic
    pub async fn generate_quiz(
        &self,
        topic: &str,
        num_questions: usize,
        difficulty: Difficulty,
    ) -> String {
        self.client
            .generate_text(&quiz_prompt(topic, num_questions, difficulty))
            .await
    }

    /// Create a personalized study plan
    pub async fn create_study_plan(
        &self,
        subject: &str,
        days: u32,
        hours_per_day: u32,
        goal: &str,
    ) -> String {
        self.client
            .generate_text(&plan_prompt(subject, days, hours_per_day, goal))
            .await
    }

    /// Summarize study content
    pub async fn summarize_content(&self, content: &str) -> String {
        self.client.generate_text(&summarize_prompt(content)).await
    }

    /// Get evidence-based study technique recommendations
    pub async fn study_tips(&self, topic: Option<&str>) -> String {
        self.client.generate_text(&tips_prompt(topic)).await
    }

    /// Forget the accumulated conversation
    pub fn reset(&mut self) {
        self.client.clear_history();
    }

    /// The underlying model client
    pub fn client(&self) -> &ModelClient {
        &self.client
    }
}
