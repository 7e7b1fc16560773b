//! Provider inference from upstream `owned_by` strings.
//!
//! Aggregating endpoints report who owns each model in free-form text
//! (`"openai"`, `"OpenAI-internal"`, `"deepinfra"`...). [`infer_provider`]
//! turns that into a [`ProviderInfo`] label for grouping and sorting.

use crate::constants::UNLISTED_PROVIDER_RANK;
use crate::models::ProviderInfo;

/// A known provider: match key, display name, type, and sort rank.
struct KnownProvider {
    key: &'static str,
    name: &'static str,
    kind: &'static str,
    rank: u32,
}

/// Checked in order for both exact and substring matches.
const KNOWN_PROVIDERS: &[KnownProvider] = &[
    KnownProvider { key: "openai", name: "OpenAI", kind: "openai", rank: 1 },
    KnownProvider { key: "anthropic", name: "Anthropic", kind: "anthropic", rank: 2 },
    KnownProvider { key: "google", name: "Google", kind: "google", rank: 3 },
    KnownProvider { key: "meta", name: "Meta", kind: "meta", rank: 4 },
    KnownProvider { key: "mistral", name: "Mistral", kind: "mistral", rank: 5 },
    KnownProvider { key: "cohere", name: "Cohere", kind: "cohere", rank: 6 },
    KnownProvider { key: "custom", name: "Custom Models", kind: "custom", rank: 7 },
    KnownProvider { key: "unknown", name: "Other Models", kind: "unknown", rank: 99 },
];

/// Maps an `owned_by` value to a provider label. Never fails.
///
/// Exact match on the lower-cased input first, then the first table entry
/// where either string contains the other, then a capitalized echo of the
/// input ranked in the middle. Blank input is treated as `"unknown"`.
pub fn infer_provider(owned_by: &str) -> ProviderInfo {
    let trimmed = owned_by.trim();
    let (raw, normalized) = if trimmed.is_empty() {
        ("unknown", "unknown".to_string())
    } else {
        (trimmed, trimmed.to_lowercase())
    };

    let known = KNOWN_PROVIDERS
        .iter()
        .find(|p| p.key == normalized)
        .or_else(|| {
            KNOWN_PROVIDERS
                .iter()
                .find(|p| normalized.contains(p.key) || p.key.contains(normalized.as_str()))
        });

    match known {
        Some(p) => ProviderInfo {
            id: normalized,
            provider_name: p.name.to_string(),
            provider_type: p.kind.to_string(),
            sorted: p.rank,
        },
        None => ProviderInfo {
            provider_name: capitalize(raw),
            provider_type: normalized.clone(),
            id: normalized,
            sorted: UNLISTED_PROVIDER_RANK,
        },
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
