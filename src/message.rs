//! Message and request types for forwarded chats.
//!
//! These are uniapi's internal types; each adapter converts them into its
//! vendor's wire format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// The role of a message sender in the conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    #[cfg(test)]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }
}

/// One chat call as handed to an adapter.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Model (or Azure deployment) name.
    pub model: String,
    /// Conversation turns, oldest first. System text lives in `system`.
    pub messages: Vec<Message>,
    pub system: Option<String>,
    pub temperature: f64,
    pub max_tokens: u64,
}

impl ChatRequest {
    /// A single-turn request with default sampling settings.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(prompt)],
            system: None,
            temperature: crate::constants::DEFAULT_TEMPERATURE,
            max_tokens: crate::constants::MAX_TOKENS,
        }
    }

    pub fn with_system(mut self, system: Option<String>) -> Self {
        self.system = system;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

/// The upstream answer: extracted text plus the raw body.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub content: String,
    pub raw: Value,
}
