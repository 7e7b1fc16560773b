//! OpenAI-shaped chat completions adapter (also used for Azure deployments).

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::{post_json, ChatAdapter};
use crate::message::ChatRequest;

/// How the API key is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStyle {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// `api-key: <key>` (Azure)
    ApiKeyHeader,
}

pub struct OpenAiAdapter {
    client: Client,
    auth: AuthStyle,
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f64,
    max_tokens: u64,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl OpenAiAdapter {
    pub fn new(client: Client, auth: AuthStyle) -> Self {
        Self { client, auth }
    }

    fn auth_header(&self, api_key: &str) -> (&'static str, String) {
        match self.auth {
            AuthStyle::Bearer => ("Authorization", format!("Bearer {api_key}")),
            AuthStyle::ApiKeyHeader => ("api-key", api_key.to_string()),
        }
    }

    fn build_body<'a>(request: &'a ChatRequest) -> CompletionBody<'a> {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = request.system.as_deref() {
            messages.push(WireMessage {
                role: "system",
                content: system,
            });
        }
        messages.extend(request.messages.iter().map(|m| WireMessage {
            role: match m.role {
                crate::message::Role::User => "user",
                crate::message::Role::Assistant => "assistant",
            },
            content: &m.content,
        }));

        CompletionBody {
            model: &request.model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl ChatAdapter for OpenAiAdapter {
    fn name(&self) -> &str {
        match self.auth {
            AuthStyle::Bearer => "openai",
            AuthStyle::ApiKeyHeader => "azure",
        }
    }

    async fn send(
        &self,
        endpoint: &str,
        api_key: Option<&str>,
        request: &ChatRequest,
    ) -> Result<Value> {
        let headers: Vec<_> = api_key.map(|k| self.auth_header(k)).into_iter().collect();
        post_json(&self.client, endpoint, &headers, &Self::build_body(request)).await
    }

    fn extract_message(&self, body: &Value) -> String {
        body["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }
}
