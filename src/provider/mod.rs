//! Unified LLM endpoint access for uniapi.
//!
//! Wraps the vendor-shaped adapters behind [`UnifiedApi`], keeping
//! request-shape details out of the CLI layer. Supports OpenAI, Anthropic,
//! and Azure request shapes via [`ApiFormat`], plus the model catalog and
//! provider inference for its entries.

mod adapter;
mod client;
mod endpoint;
mod format;
mod inference;
mod listing;

pub use client::UnifiedApi;
pub use format::ApiFormat;
pub use inference::infer_provider;
