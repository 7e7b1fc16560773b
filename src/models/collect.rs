//! Merging base models with custom model rules and the default model.

use super::ModelEntry;
use crate::provider::infer_provider;

/// Splits `name@provider` at the last `@`.
///
/// Model names may contain `@` themselves, so only the final segment is
/// taken as the provider.
pub fn split_model_key(key: &str) -> (&str, Option<&str>) {
    match key.rsplit_once('@') {
        Some((name, provider)) if !name.is_empty() && !provider.is_empty() => {
            (name, Some(provider))
        }
        _ => (key, None),
    }
}

/// Builds the canonical model list.
///
/// Applies the comma-separated `custom_models` rules to `base`, flags the
/// default model, and orders the result: default first, then by provider
/// rank (providerless entries last), keeping input order within a rank.
///
/// Rules, left to right:
/// - `all` / `+all` / `-all`: show or hide every entry
/// - `-name[@provider]`: hide matching entries
/// - `[+]name[@provider][=Display]`: show matching entries, renaming them,
///   or add a new entry when nothing matches
pub fn collect_models(
    base: &[ModelEntry],
    custom_models: &str,
    default_model: Option<&str>,
) -> Vec<ModelEntry> {
    let mut models = base.to_vec();

    for item in custom_models.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        apply_rule(&mut models, item);
    }

    if let Some(default) = default_model.map(str::trim).filter(|s| !s.is_empty()) {
        let (name, provider) = split_model_key(default);
        if let Some(entry) = models.iter_mut().find(|m| matches(m, name, provider)) {
            entry.is_default = true;
        }
    }

    models.sort_by_key(|m| {
        let rank = m.provider.as_ref().map_or(u32::MAX, |p| p.sorted);
        (!m.is_default, rank)
    });
    models
}

fn apply_rule(models: &mut Vec<ModelEntry>, item: &str) {
    let (enable, rule) = if let Some(rest) = item.strip_prefix('-') {
        (false, rest)
    } else if let Some(rest) = item.strip_prefix('+') {
        (true, rest)
    } else {
        (true, item)
    };

    let (spec, display) = match rule.split_once('=') {
        Some((spec, display)) => (spec.trim(), Some(display.trim()).filter(|d| !d.is_empty())),
        None => (rule.trim(), None),
    };

    if spec == "all" {
        for m in models.iter_mut() {
            m.available = enable;
        }
        return;
    }

    let (name, provider) = split_model_key(spec);
    let mut matched = false;
    for m in models.iter_mut().filter(|m| matches(m, name, provider)) {
        matched = true;
        m.available = enable;
        if let (true, Some(display)) = (enable, display) {
            m.display_name = display.to_string();
        }
    }

    if !matched && enable && !name.is_empty() {
        let mut entry = ModelEntry::new(name, Some(infer_provider(provider.unwrap_or("custom"))));
        if let Some(display) = display {
            entry.display_name = display.to_string();
        }
        models.push(entry);
    }
}

fn matches(entry: &ModelEntry, name: &str, provider: Option<&str>) -> bool {
    entry.name == name
        && provider.map_or(true, |p| {
            entry
                .provider_id()
                .is_some_and(|id| id.eq_ignore_ascii_case(p))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProviderInfo;

    fn entry(name: &str, owned_by: &str) -> ModelEntry {
        ModelEntry::new(name, Some(infer_provider(owned_by)))
    }

    fn base() -> Vec<ModelEntry> {
        vec![
            entry("claude-3", "anthropic"),
            entry("gpt-4", "openai"),
            entry("gpt-3.5-turbo", "openai"),
        ]
    }

    fn names(models: &[ModelEntry]) -> Vec<&str> {
        models.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn splits_on_last_at() {
        assert_eq!(split_model_key("gpt-4@openai"), ("gpt-4", Some("openai")));
        assert_eq!(split_model_key("org@model@azure"), ("org@model", Some("azure")));
        assert_eq!(split_model_key("gpt-4"), ("gpt-4", None));
        assert_eq!(split_model_key("gpt-4@"), ("gpt-4@", None));
    }

    #[test]
    fn empty_rules_sort_by_provider_rank() {
        let models = collect_models(&base(), "", None);
        assert_eq!(names(&models), ["gpt-4", "gpt-3.5-turbo", "claude-3"]);
    }

    #[test]
    fn hides_and_adds_models() {
        let models = collect_models(&base(), "-gpt-3.5-turbo, +my-model", None);
        let hidden = models.iter().find(|m| m.name == "gpt-3.5-turbo").unwrap();
        assert!(!hidden.available);

        let added = models.iter().find(|m| m.name == "my-model").unwrap();
        assert!(added.available);
        assert_eq!(added.key(), "my-model@custom");
        assert_eq!(added.provider.as_ref().unwrap().provider_name, "Custom Models");
    }

    #[test]
    fn minus_all_then_plus_one() {
        let models = collect_models(&base(), "-all,+gpt-4", None);
        let available: Vec<_> = models.iter().filter(|m| m.available).map(|m| m.name.as_str()).collect();
        assert_eq!(available, ["gpt-4"]);
    }

    #[test]
    fn renames_with_display_suffix() {
        let models = collect_models(&base(), "gpt-4@openai=GPT Four", None);
        let gpt4 = models.iter().find(|m| m.name == "gpt-4").unwrap();
        assert_eq!(gpt4.display_name, "GPT Four");
        assert_eq!(models.len(), 3);
    }

    #[test]
    fn provider_qualifier_limits_matches() {
        let mut models = base();
        models.push(entry("gpt-4", "azure"));
        let models = collect_models(&models, "-gpt-4@azure", None);
        let hidden: Vec<_> = models.iter().filter(|m| !m.available).map(|m| m.key()).collect();
        assert_eq!(hidden, ["gpt-4@azure"]);
    }

    #[test]
    fn new_entry_with_provider_suffix_infers_provider() {
        let models = collect_models(&[], "mixtral@mistral", None);
        assert_eq!(models[0].provider.as_ref().unwrap().provider_name, "Mistral");
    }

    #[test]
    fn default_model_goes_first() {
        let models = collect_models(&base(), "", Some("claude-3@anthropic"));
        assert_eq!(models[0].name, "claude-3");
        assert!(models[0].is_default);
        assert_eq!(models.iter().filter(|m| m.is_default).count(), 1);
    }

    #[test]
    fn unknown_default_is_ignored() {
        let models = collect_models(&base(), "", Some("nope"));
        assert!(models.iter().all(|m| !m.is_default));
    }

    #[test]
    fn providerless_entries_sort_last() {
        let mut models = vec![ModelEntry::new("local", None)];
        models.extend(base());
        models.push(ModelEntry::new(
            "x",
            Some(ProviderInfo {
                id: "x".into(),
                provider_name: "X".into(),
                provider_type: "x".into(),
                sorted: 50,
            }),
        ));
        let models = collect_models(&models, "", None);
        assert_eq!(models.last().unwrap().name, "local");
        assert_eq!(models[models.len() - 2].name, "x");
    }
}
