//! Vendor-shaped chat adapters.
//!
//! Every adapter implements [`ChatAdapter`]. The resolved endpoint URL is an
//! argument of each call, so an adapter holds no per-request state and one
//! instance can serve concurrent calls.

mod anthropic;
mod openai;

pub use anthropic::AnthropicAdapter;
pub use openai::{AuthStyle, OpenAiAdapter};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::format::ApiFormat;
use crate::error::UnifiedError;
use crate::message::ChatRequest;

/// A vendor request shape.
#[async_trait]
pub trait ChatAdapter: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Sends `request` to `endpoint` once and returns the raw response body.
    async fn send(
        &self,
        endpoint: &str,
        api_key: Option<&str>,
        request: &ChatRequest,
    ) -> Result<Value>;

    /// Pulls the assistant text out of a response body. Missing fields give `""`.
    fn extract_message(&self, body: &Value) -> String;
}

/// Picks the adapter for `format`. Azure endpoints speak the OpenAI body.
pub fn select_adapter(format: ApiFormat, client: Client) -> Box<dyn ChatAdapter> {
    match format {
        ApiFormat::Anthropic => Box::new(AnthropicAdapter::new(client)),
        ApiFormat::Azure => Box::new(OpenAiAdapter::new(client, AuthStyle::ApiKeyHeader)),
        ApiFormat::OpenAi => Box::new(OpenAiAdapter::new(client, AuthStyle::Bearer)),
    }
}

/// POSTs a JSON body and returns the parsed JSON response.
///
/// Non-success statuses become [`UnifiedError::Upstream`].
pub(crate) async fn post_json<B: Serialize + ?Sized>(
    client: &Client,
    endpoint: &str,
    headers: &[(&str, String)],
    body: &B,
) -> Result<Value> {
    let mut builder = client.post(endpoint).json(body);
    for (name, value) in headers {
        builder = builder.header(*name, value);
    }

    let response = builder
        .send()
        .await
        .with_context(|| format!("Request to {endpoint} failed"))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        return Err(UnifiedError::Upstream {
            status: status.as_u16(),
            body: text,
        }
        .into());
    }

    serde_json::from_str(&text).context("Response body is not valid JSON")
}

#[cfg(test)]
mod tests;
