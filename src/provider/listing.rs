//! Model catalog fetching from the unified endpoint.
//!
//! The catalog is best-effort: every failure is logged and reported to the
//! caller as an empty list, so a bad upstream never breaks a listing.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::endpoint::{models_endpoint, normalize_base_url};
use super::inference::infer_provider;
use crate::config::UnifiedConfig;
use crate::models::ModelEntry;

/// GET `{base}/v1/models` and map each entry to a [`ModelEntry`].
///
/// `unified.api_key` must already be resolved. Returns `[]` when the base
/// URL or key is missing, on transport errors, on non-success statuses, and
/// when the body has no `data` array.
pub async fn fetch_models(client: &Client, unified: &UnifiedConfig) -> Vec<ModelEntry> {
    let base_url = match normalize_base_url(unified.base_url.as_deref()) {
        Ok(url) => url,
        Err(err) => {
            error!("Failed to fetch models: {err}");
            return Vec::new();
        }
    };

    let Some(api_key) = unified.api_key.as_deref().filter(|k| !k.is_empty()) else {
        warn!("Unified API key is not configured; skipping model catalog");
        return Vec::new();
    };

    let url = models_endpoint(&base_url);
    debug!(%url, "Fetching model catalog");

    let response = match client
        .get(&url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            error!("Failed to fetch models from {url}: {err}");
            return Vec::new();
        }
    };

    let status = response.status();
    if !status.is_success() {
        error!(status = status.as_u16(), "Model catalog request failed");
        return Vec::new();
    }

    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(err) => {
            error!("Model catalog body is not valid JSON: {err}");
            return Vec::new();
        }
    };

    match parse_catalog(&body) {
        Some(models) => {
            debug!(count = models.len(), "Processed model catalog");
            models
        }
        None => {
            warn!("Invalid model catalog format, expected a data array");
            Vec::new()
        }
    }
}

/// Maps `{ data: [{ id, owned_by }] }` to entries. `None` without a `data` array.
///
/// Entries without a string `id` are skipped; a missing or blank `owned_by`
/// counts as `"unknown"`.
pub fn parse_catalog(body: &Value) -> Option<Vec<ModelEntry>> {
    let data = body.get("data")?.as_array()?;
    let models = data
        .iter()
        .filter_map(|m| {
            let id = m.get("id")?.as_str()?;
            let owned_by = m
                .get("owned_by")
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or("unknown");
            Some(ModelEntry::new(id, Some(infer_provider(owned_by))))
        })
        .collect();
    Some(models)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn unified(base_url: &str) -> UnifiedConfig {
        UnifiedConfig {
            enabled: true,
            base_url: Some(base_url.to_string()),
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn parses_ids_and_owners() {
        let body = json!({"data": [
            {"id": "gpt-4", "owned_by": "openai"},
            {"id": "claude-3", "owned_by": "Anthropic"},
            {"id": "mystery"},
            {"id": "blank", "owned_by": ""},
            {"owned_by": "openai"}
        ]});
        let models = parse_catalog(&body).unwrap();
        let keys: Vec<_> = models.iter().map(ModelEntry::key).collect();
        assert_eq!(
            keys,
            ["gpt-4@openai", "claude-3@anthropic", "mystery@unknown", "blank@unknown"]
        );
        assert!(models.iter().all(|m| m.available && m.sorted == 0));
        assert_eq!(models[2].provider.as_ref().unwrap().provider_name, "Other Models");
    }

    #[test]
    fn rejects_bodies_without_data_array() {
        assert!(parse_catalog(&json!({})).is_none());
        assert!(parse_catalog(&json!({"data": "nope"})).is_none());
        assert_eq!(parse_catalog(&json!({"data": []})).unwrap().len(), 0);
    }

    #[tokio::test]
    async fn fetches_catalog_with_bearer_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "gpt-4", "owned_by": "openai"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let models = fetch_models(&Client::new(), &unified(&format!("{}/", server.uri()))).await;
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "gpt-4");
        assert_eq!(models[0].provider.as_ref().unwrap().sorted, 1);
    }

    #[tokio::test]
    async fn server_error_yields_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(fetch_models(&Client::new(), &unified(&server.uri())).await.is_empty());
    }

    #[tokio::test]
    async fn body_without_data_yields_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        assert!(fetch_models(&Client::new(), &unified(&server.uri())).await.is_empty());
    }

    #[tokio::test]
    async fn non_json_body_yields_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        assert!(fetch_models(&Client::new(), &unified(&server.uri())).await.is_empty());
    }

    #[tokio::test]
    async fn missing_key_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(0)
            .mount(&server)
            .await;

        let mut config = unified(&server.uri());
        config.api_key = None;
        assert!(fetch_models(&Client::new(), &config).await.is_empty());
    }

    #[tokio::test]
    async fn unreachable_host_yields_empty_list() {
        // Port 9 (discard) on localhost is not listening in test environments.
        let models = fetch_models(&Client::new(), &unified("http://127.0.0.1:9")).await;
        assert!(models.is_empty());
    }

    #[tokio::test]
    async fn missing_base_url_yields_empty_list() {
        let config = UnifiedConfig::default();
        assert!(fetch_models(&Client::new(), &config).await.is_empty());
    }
}
