//! Environment variable substitution and API key resolution.

use super::types::Config;

use crate::constants::API_KEY_ENV;

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        for field in [
            &mut self.unified.base_url,
            &mut self.unified.api_key,
            &mut self.models.default_model,
            &mut self.models.custom_models,
        ] {
            if let Some(value) = field {
                *value = Self::resolve_str(value);
            }
        }
    }

    /// Replace {env:VAR} with the environment variable value.
    ///
    /// Substituted values are inserted as-is and never rescanned.
    pub(super) fn resolve_str(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        let mut rest = s;
        while let Some(start) = rest.find("{env:") {
            let Some(end) = rest[start..].find('}') else {
                break;
            };
            let var_name = &rest[start + 5..start + end];
            result.push_str(&rest[..start]);
            result.push_str(&std::env::var(var_name).unwrap_or_default());
            rest = &rest[start + end + 1..];
        }
        result.push_str(rest);
        result
    }

    /// Resolve the unified API key: env var first, then config value.
    /// Blank values count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Ok(val) = std::env::var(API_KEY_ENV) {
            if !val.trim().is_empty() {
                return Some(val);
            }
        }
        self.unified
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
    }

    /// A copy of the unified settings with the API key fully resolved.
    pub fn unified_resolved(&self) -> super::UnifiedConfig {
        let mut unified = self.unified.clone();
        unified.api_key = self.resolve_api_key();
        unified
    }
}
