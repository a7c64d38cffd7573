//! Integration tests for the model client against a mock API server

mod test_utils;

use mockito::{Matcher, Server};
use serde_json::json;
use study_assistant::{
    ModelClient, Role, Transcript, CHAT_ERROR_PREFIX, GENERATION_ERROR_PREFIX,
};

use crate::test_utils::{completion_body, test_config};

#[tokio::test]
async fn it_does_not_contact_the_network_on_construction() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = ModelClient::new(test_config(&server.url()));
    assert!(client.history().is_empty());

    mock.assert_async().await;
}

#[tokio::test]
async fn it_generates_the_same_response_for_repeated_prompts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "model": "test-model",
            "max_tokens": 100,
            "temperature": 0.5,
            "messages": [{"role": "user", "content": "Explain recursion"}],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Recursion is..."))
        .expect(2)
        .create_async()
        .await;

    let client = ModelClient::new(test_config(&server.url()));

    let first = client.generate("Explain recursion").await.unwrap();
    let second = client.generate("Explain recursion").await.unwrap();

    assert_eq!(first, "Recursion is...");
    assert_eq!(second, "Recursion is...");
    // generate is stateless; nothing accumulates.
    assert!(client.history().is_empty());

    mock.assert_async().await;
}

#[tokio::test]
async fn it_records_one_user_and_one_model_entry_per_turn() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Hi there!"))
        .expect(1)
        .create_async()
        .await;

    let mut client = ModelClient::new(test_config(&server.url()));
    let reply = client.chat("Hello", None).await.unwrap();
    assert_eq!(reply, "Hi there!");

    let entries = client.history().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].role, Role::User);
    assert_eq!(entries[0].content, "Hello");
    assert_eq!(entries[1].role, Role::Model);
    assert_eq!(entries[1].content, "Hi there!");

    mock.assert_async().await;
}

#[tokio::test]
async fn it_replays_the_full_history_on_later_turns() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Hi there!"))
        .expect(1)
        .create_async()
        .await;

    let mut client = ModelClient::new(test_config(&server.url()));
    client.chat("Hello", None).await.unwrap();

    // The second request must carry the accumulated transcript plus the
    // new message. More recently created mocks take precedence.
    let second = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "messages": [
                {"role": "user", "content": "Hello"},
                {"role": "assistant", "content": "Hi there!"},
                {"role": "user", "content": "And again"},
            ],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Twice!"))
        .expect(1)
        .create_async()
        .await;

    let reply = client.chat("And again", None).await.unwrap();
    assert_eq!(reply, "Twice!");
    assert_eq!(client.history().len(), 4);

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn it_leaves_internal_history_untouched_with_external_history() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("External reply"))
        .expect(1)
        .create_async()
        .await;

    let mut client = ModelClient::new(test_config(&server.url()));
    let mut external = Transcript::new();

    let reply = client.chat("Hello", Some(&mut external)).await.unwrap();
    assert_eq!(reply, "External reply");
    assert_eq!(external.len(), 2);
    assert!(client.history().is_empty());

    mock.assert_async().await;
}

#[tokio::test]
async fn it_starts_over_after_clear_history() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Ok"))
        .expect(3)
        .create_async()
        .await;

    let mut client = ModelClient::new(test_config(&server.url()));
    client.chat("one", None).await.unwrap();
    client.chat("two", None).await.unwrap();
    assert_eq!(client.history().len(), 4);

    client.clear_history();
    assert!(client.history().is_empty());

    client.chat("three", None).await.unwrap();
    assert_eq!(client.history().len(), 2);

    mock.assert_async().await;
}

#[tokio::test]
async fn it_returns_sentinel_strings_on_api_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {"message": "API key not valid", "type": "invalid_request_error", "param": null, "code": null}}"#,
        )
        .expect(2)
        .create_async()
        .await;

    let mut client = ModelClient::new(test_config(&server.url()));

    let generated = client.generate_text("prompt").await;
    assert!(generated.starts_with(GENERATION_ERROR_PREFIX));

    let chatted = client.chat_text("Hello", None).await;
    assert!(chatted.starts_with(CHAT_ERROR_PREFIX));

    // The failed turn leaves a dangling user entry behind.
    let entries = client.history().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].role, Role::User);

    mock.assert_async().await;
}
