//! Model entries, the built-in model list, and selection/grouping logic.
//!
//! [`ModelEntry`] is the one record every listing works on: the catalog
//! fetcher produces them, [`collect_models`] merges custom rules into them,
//! [`EnabledModels`] filters them, and the [`grouping`] helpers bucket them
//! for display.

mod collect;
mod enabled;
pub mod grouping;

pub use collect::{collect_models, split_model_key};
pub use enabled::{EnabledModels, ModelView};

use serde::Serialize;

use crate::provider::infer_provider;

/// Display label for whoever serves a model.
///
/// Denormalized: two entries from the same provider each carry a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Lower-cased `owned_by` value; the part after `@` in selection keys.
    pub id: String,
    /// Human-readable name used as the group heading.
    pub provider_name: String,
    pub provider_type: String,
    /// Sort rank; lower sorts first.
    pub sorted: u32,
}

/// A model as shown in listings and the enabled-model picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelEntry {
    pub name: String,
    pub display_name: String,
    pub available: bool,
    pub provider: Option<ProviderInfo>,
    pub sorted: u32,
    /// Set on the configured default model.
    pub is_default: bool,
}

impl ModelEntry {
    /// An available entry whose display name is its identifier.
    pub fn new(name: impl Into<String>, provider: Option<ProviderInfo>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            available: true,
            provider,
            sorted: 0,
            is_default: false,
        }
    }

    /// Selection key: `name@providerId`, or the bare name without a provider.
    pub fn key(&self) -> String {
        match &self.provider {
            Some(p) => format!("{}@{}", self.name, p.id),
            None => self.name.clone(),
        }
    }

    /// Provider id, if any.
    pub fn provider_id(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.id.as_str())
    }
}

/// Models offered when the unified endpoint's catalog is unavailable.
/// Each pair is `(model, owned_by)`.
pub const BUILTIN_MODELS: &[(&str, &str)] = &[
    ("gpt-4o", "openai"),
    ("gpt-4o-mini", "openai"),
    ("gpt-4.1", "openai"),
    ("gpt-4.1-mini", "openai"),
    ("o3", "openai"),
    ("o4-mini", "openai"),
    ("claude-opus-4-1", "anthropic"),
    ("claude-sonnet-4-5", "anthropic"),
    ("claude-haiku-4-5", "anthropic"),
    ("gemini-2.5-pro", "google"),
    ("gemini-2.5-flash", "google"),
    ("llama-3.3-70b", "meta"),
    ("mistral-large-latest", "mistral"),
    ("command-r-plus", "cohere"),
];

/// The built-in list as entries with inferred providers.
pub fn builtin_models() -> Vec<ModelEntry> {
    BUILTIN_MODELS
        .iter()
        .map(|(name, owned_by)| ModelEntry::new(*name, Some(infer_provider(owned_by))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_includes_provider_id() {
        let entry = ModelEntry::new("gpt-4", Some(infer_provider("openai")));
        assert_eq!(entry.key(), "gpt-4@openai");
    }

    #[test]
    fn providerless_key_is_bare_name() {
        assert_eq!(ModelEntry::new("local", None).key(), "local");
    }

    #[test]
    fn builtin_models_have_providers() {
        let models = builtin_models();
        assert_eq!(models.len(), BUILTIN_MODELS.len());
        assert!(models.iter().all(|m| m.provider.is_some() && m.available));
        assert_eq!(models[0].provider_id(), Some("openai"));
    }
}
