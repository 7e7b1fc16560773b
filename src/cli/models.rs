//! Handlers for `uniapi models` and `uniapi enable`.

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use super::EnableAction;
use crate::config::Config;
use crate::models::grouping::GroupBy;
use crate::models::{builtin_models, EnabledModels, ModelEntry, ModelView};
use crate::{output, provider};

/// Remote catalog, or the built-in list when offline or the catalog is empty.
async fn load_catalog(config: &Config, offline: bool) -> Vec<ModelEntry> {
    if !offline && config.unified.base_url.is_some() {
        let models = provider::UnifiedApi::new()
            .models(&config.unified_resolved())
            .await;
        if !models.is_empty() {
            return models;
        }
        debug!("Remote catalog empty; using built-in models");
    }
    builtin_models()
}

/// Entries a listing shows: merged with custom rules, narrowed by the
/// enabled set unless `show_all`, and limited to available ones.
fn visible_models(
    view: &mut ModelView,
    base: &[ModelEntry],
    config: &Config,
    show_all: bool,
) -> Vec<ModelEntry> {
    let models = if show_all {
        view.all_models(base, &config.models)
    } else {
        view.filtered_models(base, &config.models)
    };
    models.iter().filter(|m| m.available).cloned().collect()
}

pub(crate) async fn list_models(config: &Config, group_by: GroupBy, show_all: bool, offline: bool) -> Result<()> {
    let base = load_catalog(config, offline).await;
    let mut view = ModelView::new();
    let models = visible_models(&mut view, &base, config, show_all);

    if !show_all {
        output::print_selection_summary(&config.models.enabled);
        if config.models.enabled.is_none_selected() {
            println!(
                "  {}",
                "Run `uniapi enable all` or pass --all to see the catalog".dimmed()
            );
        }
        println!();
    }
    let groups = group_by.apply(&models);
    output::print_model_groups(&groups, &config.models.enabled);
    Ok(())
}

/// Applies one `enable` action and persists the result to the global config.
pub(crate) async fn handle_enable(config: Config, action: EnableAction, offline: bool) -> Result<()> {
    let current = config.models.enabled.clone();
    if let EnableAction::Status = action {
        output::print_selection_summary(&current);
        if let EnabledModels::Subset(keys) = &current {
            for key in keys {
                println!("  {}", key);
            }
        }
        return Ok(());
    }

    let base = load_catalog(&config, offline).await;
    let mut view = ModelView::new();
    let all = view.all_models(&base, &config.models);
    let next = apply_action(&current, &action, all);

    let path = save_enabled(next.clone())?;
    output::print_selection_summary(&next);
    println!("{} {}", "Saved".green(), path.display());
    Ok(())
}

fn apply_action(current: &EnabledModels, action: &EnableAction, all: &[ModelEntry]) -> EnabledModels {
    match action {
        EnableAction::Status => current.clone(),
        EnableAction::All => EnabledModels::select_all(all),
        EnableAction::None => EnabledModels::clear(),
        EnableAction::Invert => current.invert(all),
        EnableAction::On { key } => current.set_enabled(key, true, all),
        EnableAction::Off { key } => current.set_enabled(key, false, all),
    }
}

/// Writes `enabled` into the global config file, leaving its other values as
/// written on disk.
fn save_enabled(enabled: EnabledModels) -> Result<std::path::PathBuf> {
    let path = Config::config_path()?;
    let mut global = if path.exists() {
        Config::load_from(&path)?
    } else {
        Config::default()
    };
    global.models.enabled = enabled;
    global.save().context("Failed to save enabled models")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::infer_provider;

    fn catalog() -> Vec<ModelEntry> {
        let mut hidden = ModelEntry::new("gpt-3.5-turbo", Some(infer_provider("openai")));
        hidden.available = false;
        vec![
            ModelEntry::new("gpt-4", Some(infer_provider("openai"))),
            ModelEntry::new("claude-3", Some(infer_provider("anthropic"))),
            hidden,
        ]
    }

    fn keys(models: &[ModelEntry]) -> Vec<String> {
        models.iter().map(ModelEntry::key).collect()
    }

    #[test]
    fn visible_models_respects_selection_and_availability() {
        let mut config = Config::default();
        config.models.enabled = EnabledModels::Subset(vec!["claude-3@anthropic".into()]);
        let mut view = ModelView::new();

        let shown = visible_models(&mut view, &catalog(), &config, false);
        assert_eq!(keys(&shown), ["claude-3@anthropic"]);

        let everything = visible_models(&mut view, &catalog(), &config, true);
        assert_eq!(keys(&everything), ["gpt-4@openai", "claude-3@anthropic"]);
    }

    #[test]
    fn visible_models_include_custom_entries() {
        let mut config = Config::default();
        config.models.custom_models = Some("+my-model@custom=Mine".into());
        let mut view = ModelView::new();

        let shown = visible_models(&mut view, &catalog(), &config, false);
        assert!(shown.iter().any(|m| m.key() == "my-model@custom" && m.display_name == "Mine"));
    }

    #[test]
    fn actions_map_to_selection_operations() {
        let all = catalog();
        let current = EnabledModels::AllEnabled;

        assert_eq!(apply_action(&current, &EnableAction::None, &all), EnabledModels::NoneEnabled);
        assert_eq!(apply_action(&current, &EnableAction::Invert, &all), EnabledModels::NoneEnabled);
        assert_eq!(
            apply_action(
                &current,
                &EnableAction::Off { key: "gpt-4@openai".into() },
                &all
            ),
            EnabledModels::Subset(vec!["claude-3@anthropic".into()])
        );
        assert_eq!(
            apply_action(
                &EnabledModels::NoneEnabled,
                &EnableAction::On { key: "gpt-4@openai".into() },
                &all
            ),
            EnabledModels::Subset(vec!["gpt-4@openai".into()])
        );
    }

    #[tokio::test]
    async fn offline_catalog_is_builtin() {
        let models = load_catalog(&Config::default(), true).await;
        assert_eq!(models, builtin_models());
    }
}
