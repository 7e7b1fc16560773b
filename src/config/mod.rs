//! Configuration types and path resolution for uniapi.
//!
//! uniapi stores its settings as TOML at the platform's XDG config path
//! (e.g. `~/.config/uniapi/config.toml` on Linux). A `uniapi.toml` found
//! between the current directory and the git root overrides it.
//!
//! Operations never read configuration from global state: callers load a
//! [`Config`] once and pass it (or its [`UnifiedConfig`]) down explicitly.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::{Config, ModelsConfig, UnifiedConfig};

use anyhow::{bail, Context, Result};

impl Config {
    /// Load config with precedence: project > global > defaults.
    /// Creates default config file if none exists.
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project()?;

        let mut config = global;
        if let Some(proj) = project {
            config = Self::merge(config, proj);
        }

        config.resolve_substitutions();
        Ok(config)
    }

    /// Sets a single dotted key (e.g. `unified.base_url`) from its string form.
    ///
    /// An empty value clears optional fields.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let optional = || (!value.is_empty()).then(|| value.to_string());
        match key {
            "unified.enabled" => {
                self.unified.enabled = value
                    .parse()
                    .with_context(|| format!("Expected true or false, got '{value}'"))?;
            }
            "unified.format" => self.unified.format = value.parse()?,
            "unified.base_url" => self.unified.base_url = optional(),
            "unified.api_key" => self.unified.api_key = optional(),
            "models.default_model" => self.models.default_model = optional(),
            "models.custom_models" => self.models.custom_models = optional(),
            other => bail!(
                "Unknown config key: {other}. Supported: unified.enabled, unified.format, \
                 unified.base_url, unified.api_key, models.default_model, models.custom_models"
            ),
        }
        Ok(())
    }
}
