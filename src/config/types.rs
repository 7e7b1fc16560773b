//! Struct definitions and serde defaults for uniapi configuration.

use serde::{Deserialize, Serialize};

use crate::models::EnabledModels;
use crate::provider::ApiFormat;

/// Root configuration for uniapi, deserialized from `config.toml`.
///
/// Fields use serde defaults so uniapi can run with sensible defaults
/// when no config file exists.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Connection settings for the unified endpoint.
    #[serde(default)]
    pub unified: UnifiedConfig,
    /// Model list customization and the enabled-model selection.
    #[serde(default)]
    pub models: ModelsConfig,
}

/// Connection details for the unified endpoint.
///
/// One base URL serves every model; `format` decides which vendor shape
/// the requests take.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UnifiedConfig {
    /// Whether chat requests may be forwarded at all.
    #[serde(default)]
    pub enabled: bool,
    /// Request shape spoken by the endpoint.
    #[serde(default)]
    pub format: ApiFormat,
    /// Endpoint root, with or without scheme (e.g. `"api.example.com"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// API key. Can also be set via `UNIFIED_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ModelsConfig {
    /// Model pinned to the top of listings, as `name` or `name@provider`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
    /// Comma-separated custom model rules (`+name`, `-name`, `name=Display`, `-all`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_models: Option<String>,
    /// Enabled-model selection. `[]` shows everything, `["_none_"]` nothing.
    #[serde(default)]
    pub enabled: EnabledModels,
}

/// A project `uniapi.toml` as written: every field is optional so an
/// explicit value (even a default one) can be told apart from an absent one.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub(super) struct ProjectConfig {
    #[serde(default)]
    pub unified: ProjectUnifiedConfig,
    #[serde(default)]
    pub models: ProjectModelsConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub(super) struct ProjectUnifiedConfig {
    pub enabled: Option<bool>,
    pub format: Option<ApiFormat>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub(super) struct ProjectModelsConfig {
    pub default_model: Option<String>,
    pub custom_models: Option<String>,
    pub enabled: Option<EnabledModels>,
}
