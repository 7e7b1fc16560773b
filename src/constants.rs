//! Centralized constants for uniapi.
//!
//! All magic strings, endpoint paths, and configuration defaults live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "uniapi";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "uniapi.toml";

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "UNIFIED_API_KEY";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// --- Endpoints ---

/// OpenAI-shaped chat completions path.
pub const OPENAI_CHAT_PATH: &str = "/v1/chat/completions";

/// Anthropic-shaped messages path.
pub const ANTHROPIC_MESSAGES_PATH: &str = "/v1/messages";

/// Model catalog path.
pub const MODELS_PATH: &str = "/v1/models";

/// API version pinned for Azure deployment endpoints.
pub const AZURE_API_VERSION: &str = "2023-08-01-preview";

/// Value of the `anthropic-version` header.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Scheme prepended to base URLs given without one.
pub const DEFAULT_SCHEME: &str = "https://";

// --- Chat defaults ---

/// Maximum tokens for forwarded completions.
pub const MAX_TOKENS: u64 = 4096;

/// Sampling temperature when none is given.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Model used by `chat` when neither the flag nor the config names one.
pub const FALLBACK_CHAT_MODEL: &str = "gpt-4o-mini";

// --- Model selection ---

/// Persisted marker for an explicitly empty enabled-model selection.
pub const NONE_SELECTED_MARKER: &str = "_none_";

/// Group name for entries that match no known family or provider.
pub const OTHER_MODELS_GROUP: &str = "Other Models";

/// Rank given to providers that are not in the inference table.
pub const UNLISTED_PROVIDER_RANK: u32 = 50;
