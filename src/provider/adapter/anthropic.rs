//! Anthropic-shaped messages adapter.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::{post_json, ChatAdapter};
use crate::constants::ANTHROPIC_VERSION;
use crate::message::{ChatRequest, Message};

pub struct AnthropicAdapter {
    client: Client,
}

#[derive(Debug, Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: &'a [Message],
    max_tokens: u64,
    temperature: f64,
}

impl AnthropicAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatAdapter for AnthropicAdapter {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn send(
        &self,
        endpoint: &str,
        api_key: Option<&str>,
        request: &ChatRequest,
    ) -> Result<Value> {
        let mut headers = vec![("anthropic-version", ANTHROPIC_VERSION.to_string())];
        if let Some(key) = api_key {
            headers.push(("x-api-key", key.to_string()));
        }

        let body = MessagesBody {
            model: &request.model,
            system: request.system.as_deref(),
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };
        post_json(&self.client, endpoint, &headers, &body).await
    }

    fn extract_message(&self, body: &Value) -> String {
        body["content"]
            .as_array()
            .map(|blocks| {
                blocks
                    .iter()
                    .filter(|b| b["type"] == "text")
                    .filter_map(|b| b["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
