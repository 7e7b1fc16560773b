use super::*;
use crate::message::Message;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> ChatRequest {
    ChatRequest::new("gpt-4", "hello").with_system(Some("be brief".into()))
}

#[test]
fn selects_adapter_by_format() {
    let client = Client::new();
    assert_eq!(select_adapter(ApiFormat::OpenAi, client.clone()).name(), "openai");
    assert_eq!(select_adapter(ApiFormat::Azure, client.clone()).name(), "azure");
    assert_eq!(select_adapter(ApiFormat::Anthropic, client).name(), "anthropic");
}

#[test]
fn openai_extracts_first_choice() {
    let adapter = OpenAiAdapter::new(Client::new(), AuthStyle::Bearer);
    let body = json!({"choices": [{"message": {"content": "hi there"}}]});
    assert_eq!(adapter.extract_message(&body), "hi there");
    assert_eq!(adapter.extract_message(&json!({"choices": []})), "");
}

#[test]
fn anthropic_joins_text_blocks() {
    let adapter = AnthropicAdapter::new(Client::new());
    let body = json!({"content": [
        {"type": "text", "text": "Hello, "},
        {"type": "tool_use", "name": "x"},
        {"type": "text", "text": "world"}
    ]});
    assert_eq!(adapter.extract_message(&body), "Hello, world");
    assert_eq!(adapter.extract_message(&json!({})), "");
}

#[tokio::test]
async fn openai_sends_bearer_and_system_first() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4",
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "hello"}
            ]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "ok"}}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let adapter = OpenAiAdapter::new(Client::new(), AuthStyle::Bearer);
    let endpoint = format!("{}/v1/chat/completions", server.uri());
    let raw = adapter
        .send(&endpoint, Some("sk-test"), &request())
        .await
        .unwrap();
    assert_eq!(adapter.extract_message(&raw), "ok");
}

#[tokio::test]
async fn azure_sends_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/deployments/gpt-4/chat/completions"))
        .and(header("api-key", "az-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "azure ok"}}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let adapter = select_adapter(ApiFormat::Azure, Client::new());
    let endpoint = format!(
        "{}/openai/deployments/gpt-4/chat/completions?api-version=2023-08-01-preview",
        server.uri()
    );
    let raw = adapter.send(&endpoint, Some("az-key"), &request()).await.unwrap();
    assert_eq!(adapter.extract_message(&raw), "azure ok");
}

#[tokio::test]
async fn anthropic_sends_version_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "ant-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-3",
            "system": "be brief",
            "messages": [
                {"role": "user", "content": "hello"},
                {"role": "assistant", "content": "hi"},
                {"role": "user", "content": "again"}
            ]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"content": [{"type": "text", "text": "claude ok"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut req = ChatRequest::new("claude-3", "hello").with_system(Some("be brief".into()));
    req.messages.push(Message::assistant("hi"));
    req.messages.push(Message::user("again"));

    let adapter = AnthropicAdapter::new(Client::new());
    let endpoint = format!("{}/v1/messages", server.uri());
    let raw = adapter.send(&endpoint, Some("ant-key"), &req).await.unwrap();
    assert_eq!(adapter.extract_message(&raw), "claude ok");
}

#[tokio::test]
async fn non_success_status_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let adapter = OpenAiAdapter::new(Client::new(), AuthStyle::Bearer);
    let endpoint = format!("{}/v1/chat/completions", server.uri());
    let err = adapter
        .send(&endpoint, Some("k"), &request())
        .await
        .unwrap_err();

    match err.downcast_ref::<UnifiedError>() {
        Some(UnifiedError::Upstream { status, body }) => {
            assert_eq!(*status, 429);
            assert_eq!(body, "slow down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
