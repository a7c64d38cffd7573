//! Configuration module for the study assistant
//!
//! This module contains:
//! - `prompts`: prompt templates for the study features

mod prompts;

pub use prompts::{
    chat_prompt, explain_prompt, plan_prompt, quiz_prompt, summarize_prompt, tips_prompt,
    Difficulty, SYSTEM_CONTEXT,
};
