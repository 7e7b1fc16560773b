//! Typed errors for the unified client.
//!
//! Configuration problems are reported before any request leaves the
//! process; upstream failures carry the HTTP status and body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnifiedError {
    /// `unified.enabled` is false.
    #[error("Unified API is not enabled. Run `uniapi config set unified.enabled true`")]
    Disabled,

    /// `unified.base_url` is unset or blank.
    #[error("Unified API base URL is not configured")]
    MissingBaseUrl,

    /// No key in config or `UNIFIED_API_KEY`.
    #[error("Unified API key is not configured. Set UNIFIED_API_KEY or unified.api_key")]
    MissingApiKey,

    /// The forwarded call returned a non-success status.
    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },
}
