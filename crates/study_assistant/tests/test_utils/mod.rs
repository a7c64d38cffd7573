//! Shared helpers for integration tests

use study_assistant::ModelConfig;

/// Minimal OpenAI-compatible completion response body
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2}
    })
    .to_string()
}

/// Configuration pointed at the mock server
pub fn test_config(base_url: &str) -> ModelConfig {
    ModelConfig::new("test-key")
        .with_base_url(base_url)
        .with_model("test-model")
        .with_max_tokens(100)
        .with_temperature(0.5)
}
