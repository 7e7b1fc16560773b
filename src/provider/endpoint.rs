//! Base URL normalization and endpoint resolution.
//!
//! The forwarder resolves the full request URL here and hands it to the
//! adapter as a parameter. Adapters never build paths themselves.

use crate::constants::{
    ANTHROPIC_MESSAGES_PATH, AZURE_API_VERSION, DEFAULT_SCHEME, MODELS_PATH, OPENAI_CHAT_PATH,
};
use crate::error::UnifiedError;

use super::format::ApiFormat;

/// Normalizes a configured base URL.
///
/// Strips one trailing slash and prepends `https://` when the value does
/// not start with `http`. Unset or blank values are a configuration error.
pub fn normalize_base_url(raw: Option<&str>) -> Result<String, UnifiedError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(UnifiedError::MissingBaseUrl)?;

    let trimmed = raw.strip_suffix('/').unwrap_or(raw);
    if trimmed.starts_with("http") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{DEFAULT_SCHEME}{trimmed}"))
    }
}

/// Full chat URL for `format` on an already-normalized `base_url`.
pub fn chat_endpoint(format: ApiFormat, base_url: &str, model: &str) -> String {
    match format {
        ApiFormat::OpenAi => format!("{base_url}{OPENAI_CHAT_PATH}"),
        ApiFormat::Anthropic => format!("{base_url}{ANTHROPIC_MESSAGES_PATH}"),
        ApiFormat::Azure => format!(
            "{base_url}/openai/deployments/{model}/chat/completions?api-version={AZURE_API_VERSION}"
        ),
    }
}

/// Model catalog URL on an already-normalized `base_url`.
pub fn models_endpoint(base_url: &str) -> String {
    format!("{base_url}{MODELS_PATH}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_scheme_and_strips_slash() {
        assert_eq!(
            normalize_base_url(Some("example.com/")).unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn keeps_explicit_scheme() {
        assert_eq!(normalize_base_url(Some("http://x.com")).unwrap(), "http://x.com");
        assert_eq!(
            normalize_base_url(Some("https://x.com/proxy/")).unwrap(),
            "https://x.com/proxy"
        );
    }

    #[test]
    fn strips_only_one_trailing_slash() {
        assert_eq!(
            normalize_base_url(Some("https://x.com//")).unwrap(),
            "https://x.com/"
        );
    }

    #[test]
    fn missing_base_url_is_an_error() {
        assert!(matches!(
            normalize_base_url(None),
            Err(UnifiedError::MissingBaseUrl)
        ));
        assert!(matches!(
            normalize_base_url(Some("   ")),
            Err(UnifiedError::MissingBaseUrl)
        ));
    }

    #[test]
    fn openai_endpoint() {
        let url = chat_endpoint(ApiFormat::OpenAi, "https://example.com", "gpt-4");
        assert!(url.ends_with("/v1/chat/completions"));
        assert_eq!(url, "https://example.com/v1/chat/completions");
    }

    #[test]
    fn anthropic_endpoint() {
        let url = chat_endpoint(ApiFormat::Anthropic, "https://example.com", "claude-3");
        assert!(url.ends_with("/v1/messages"));
    }

    #[test]
    fn azure_endpoint_embeds_deployment() {
        let url = chat_endpoint(ApiFormat::Azure, "https://example.com", "gpt-4");
        assert!(url.contains("/openai/deployments/gpt-4/chat/completions?api-version=2023-08-01-preview"));
    }

    #[test]
    fn models_endpoint_appends_path() {
        assert_eq!(
            models_endpoint("https://example.com"),
            "https://example.com/v1/models"
        );
    }
}
