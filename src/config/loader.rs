//! File loading, saving, and merging for uniapi configuration.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{Config, ModelsConfig, ProjectConfig, UnifiedConfig};

/// Written on first run so users have something to edit.
const DEFAULT_CONFIG_TOML: &str = r#"[unified]
enabled = false
format = "openai"
api_key = "{env:UNIFIED_API_KEY}"

[models]
enabled = []
"#;

impl Config {
    /// Loads the global config from `~/.config/uniapi/config.toml`.
    ///
    /// If no config file exists, creates one with sensible defaults
    /// (including an `{env:VAR}` placeholder for the API key) and returns it.
    pub(super) fn load_global() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, DEFAULT_CONFIG_TOML)
                .with_context(|| format!("Failed to write default config to {:?}", path))?;
            let config: Config = toml::from_str(DEFAULT_CONFIG_TOML)
                .with_context(|| "Failed to parse default config".to_string())?;
            return Ok(config);
        }
        Self::load_from(&path)
    }

    /// Reads and parses a config file without substitution or merging.
    pub fn load_from(path: &Path) -> Result<Self> {
        read_toml(path)
    }

    /// Look for uniapi.toml in current dir, then walk up to git root.
    pub(super) fn load_project() -> Result<Option<ProjectConfig>> {
        let Some(path) = Self::find_project_file(&std::env::current_dir()?) else {
            return Ok(None);
        };
        read_toml(&path).map(Some)
    }

    /// Walks from `start` towards the filesystem root, stopping at a git root.
    pub(super) fn find_project_file(start: &Path) -> Option<PathBuf> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(crate::constants::PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                return None;
            }
        }
    }

    /// Merge project config over global config.
    /// Project values win whenever they are written; custom model rules accumulate.
    pub(super) fn merge(global: Config, project: ProjectConfig) -> Config {
        let custom_models = match (global.models.custom_models, project.models.custom_models) {
            (Some(g), Some(p)) => Some(format!("{g},{p}")),
            (g, p) => p.or(g),
        };

        Config {
            unified: UnifiedConfig {
                enabled: project.unified.enabled.unwrap_or(global.unified.enabled),
                format: project.unified.format.unwrap_or(global.unified.format),
                base_url: project.unified.base_url.or(global.unified.base_url),
                api_key: project.unified.api_key.or(global.unified.api_key),
            },
            models: ModelsConfig {
                default_model: project.models.default_model.or(global.models.default_model),
                custom_models,
                enabled: project.models.enabled.unwrap_or(global.models.enabled),
            },
        }
    }

    /// Writes this config to the global config path.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Serializes this config as pretty TOML into `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).with_context(|| format!("Failed to write config to {:?}", path))
    }
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;
    toml::from_str(&contents).with_context(|| format!("Failed to parse config at {:?}", path))
}
