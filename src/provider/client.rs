//! The unified client: one endpoint, several vendor request shapes.
//!
//! Contains [`UnifiedApi`], which validates the unified settings, resolves
//! the endpoint for the configured [`ApiFormat`](super::ApiFormat), and
//! forwards the call to the matching adapter. Settings are passed in on
//! every call rather than read from shared state.

use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use super::adapter::select_adapter;
use super::endpoint::{chat_endpoint, normalize_base_url};
use super::listing::fetch_models;
use crate::config::UnifiedConfig;
use crate::error::UnifiedError;
use crate::message::{ChatReply, ChatRequest};
use crate::models::ModelEntry;

/// Token usage as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Usage {
    pub used: u64,
    pub total: u64,
}

/// Forwards chat and catalog requests to a unified endpoint.
///
/// Holds only the HTTP client; cloning it is cheap and clones share a
/// connection pool.
#[derive(Clone, Default)]
pub struct UnifiedApi {
    client: Client,
}

impl UnifiedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forwards one chat request.
    ///
    /// `unified.api_key` must already be resolved.
    ///
    /// # Errors
    ///
    /// [`UnifiedError::Disabled`], [`UnifiedError::MissingBaseUrl`] and
    /// [`UnifiedError::MissingApiKey`] are returned before any network traffic. Transport failures and
    /// non-success statuses from the single attempt are returned as-is.
    pub async fn chat(&self, unified: &UnifiedConfig, request: &ChatRequest) -> Result<ChatReply> {
        if !unified.enabled {
            return Err(UnifiedError::Disabled.into());
        }
        let base_url = normalize_base_url(unified.base_url.as_deref())?;
        let api_key = unified
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(UnifiedError::MissingApiKey)?;
        let endpoint = chat_endpoint(unified.format, &base_url, &request.model);
        let adapter = select_adapter(unified.format, self.client.clone());

        info!(adapter = adapter.name(), model = %request.model, "Forwarding chat request");
        debug!(%endpoint);

        let raw = adapter.send(&endpoint, Some(api_key), request).await?;
        Ok(ChatReply {
            content: self.extract_message(unified, &raw),
            raw,
        })
    }

    /// Lists the endpoint's models. Never fails; see [`fetch_models`].
    pub async fn models(&self, unified: &UnifiedConfig) -> Vec<ModelEntry> {
        fetch_models(&self.client, unified).await
    }

    /// Unified endpoints expose no usage API, so this reports zero usage
    /// once the base URL is known to be valid.
    pub fn usage(&self, unified: &UnifiedConfig) -> Result<Usage, UnifiedError> {
        normalize_base_url(unified.base_url.as_deref())?;
        Ok(Usage::default())
    }

    /// Extracts the reply text from a raw body using the configured format's adapter.
    pub fn extract_message(&self, unified: &UnifiedConfig, body: &Value) -> String {
        select_adapter(unified.format, self.client.clone()).extract_message(body)
    }
}
