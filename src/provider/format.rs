//! Request shape spoken by the unified endpoint.
//!
//! Defines [`ApiFormat`], which decides both the endpoint path and which
//! adapter builds the request body.

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies the vendor shape of the unified endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFormat {
    /// OpenAI chat completions (`/v1/chat/completions`).
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    /// Anthropic messages (`/v1/messages`).
    Anthropic,
    /// Azure OpenAI deployments (OpenAI body, per-deployment path).
    Azure,
}

impl ApiFormat {
    /// Lower-case name as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Azure => "azure",
        }
    }
}

impl FromStr for ApiFormat {
    type Err = Error;

    /// Matching is case-insensitive. Returns an error for unknown formats.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            "azure" => Ok(Self::Azure),
            other => Err(anyhow!(
                "Unknown API format: {other}. Supported: openai, anthropic, azure"
            )),
        }
    }
}

impl fmt::Display for ApiFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
