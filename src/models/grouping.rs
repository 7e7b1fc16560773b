//! Bucketing model lists into named groups for display.
//!
//! Two groupers: by model-name family prefix, and by provider label.
//! Both put unmatched items in "Other Models", which always comes last.

use clap::ValueEnum;

use super::ModelEntry;
use crate::constants::OTHER_MODELS_GROUP;

/// A known model family, recognized by name prefix.
pub struct ModelFamily {
    pub prefix: &'static str,
    pub display_name: &'static str,
}

/// Checked in order; the first matching prefix wins.
pub const MODEL_FAMILIES: &[ModelFamily] = &[
    ModelFamily { prefix: "gpt-", display_name: "GPT Models" },
    ModelFamily { prefix: "claude-", display_name: "Claude Models" },
    ModelFamily { prefix: "gemini-", display_name: "Gemini Models" },
    ModelFamily { prefix: "deepseek-", display_name: "DeepSeek Models" },
    ModelFamily { prefix: "llama-", display_name: "Llama Models" },
    ModelFamily { prefix: "qwen-", display_name: "Qwen Models" },
    ModelFamily { prefix: "yi-", display_name: "Yi Models" },
];

/// A named bucket of items, borrowed from the grouped slice.
#[derive(Debug, PartialEq)]
pub struct Group<'a, T> {
    pub name: String,
    pub items: Vec<&'a T>,
}

/// Which grouper a listing uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GroupBy {
    /// Provider label, ordered by provider rank
    #[default]
    Provider,
    /// Model family name prefix (gpt-, claude-, ...)
    Prefix,
}

impl GroupBy {
    pub fn apply(self, models: &[ModelEntry]) -> Vec<Group<'_, ModelEntry>> {
        match self {
            Self::Provider => group_by_provider(models),
            Self::Prefix => group_by_prefix(models, |m| m.name.as_str()),
        }
    }
}

/// Family names in display order, then "Other Models".
pub fn group_display_order() -> Vec<&'static str> {
    MODEL_FAMILIES
        .iter()
        .map(|f| f.display_name)
        .chain(std::iter::once(OTHER_MODELS_GROUP))
        .collect()
}

/// Groups `items` by the family prefix of `name(item)`, case-insensitively.
///
/// Groups come out in [`group_display_order`]; empty groups are omitted.
pub fn group_by_prefix<'a, T>(items: &'a [T], name: impl Fn(&T) -> &str) -> Vec<Group<'a, T>> {
    let mut buckets: Vec<(&'static str, Vec<&'a T>)> = group_display_order()
        .into_iter()
        .map(|group| (group, Vec::new()))
        .collect();

    for item in items {
        let lowered = name(item).to_lowercase();
        let group = MODEL_FAMILIES
            .iter()
            .find(|f| lowered.starts_with(f.prefix))
            .map_or(OTHER_MODELS_GROUP, |f| f.display_name);
        if let Some((_, bucket)) = buckets.iter_mut().find(|(g, _)| *g == group) {
            bucket.push(item);
        }
    }

    buckets
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(group, items)| Group {
            name: group.to_string(),
            items,
        })
        .collect()
}

/// Groups entries by provider name.
///
/// Groups are ordered by provider rank, ties keeping first-seen order.
/// Providerless entries join "Other Models", which is always last.
pub fn group_by_provider(models: &[ModelEntry]) -> Vec<Group<'_, ModelEntry>> {
    // (rank, group) in first-seen order
    let mut seen: Vec<(u32, Group<'_, ModelEntry>)> = Vec::new();

    for model in models {
        let (name, rank) = match &model.provider {
            Some(p) => (p.provider_name.as_str(), p.sorted),
            None => (OTHER_MODELS_GROUP, u32::MAX),
        };
        match seen.iter_mut().find(|(_, g)| g.name == name) {
            Some((_, group)) => group.items.push(model),
            None => seen.push((
                rank,
                Group {
                    name: name.to_string(),
                    items: vec![model],
                },
            )),
        }
    }

    seen.sort_by_key(|(rank, g)| (g.name == OTHER_MODELS_GROUP, *rank));
    seen.into_iter().map(|(_, g)| g).collect()
}
