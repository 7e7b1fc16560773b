//! The enabled-model selection and the derived model views.
//!
//! [`EnabledModels`] has three states. Persisted as a list of strings, the
//! states are encoded as: `[]` for every model, `["_none_"]` for no model,
//! anything else for exactly those keys. A list that holds the marker next
//! to real keys filters nothing.

use serde::{Deserialize, Serialize};

use super::{collect_models, ModelEntry};
use crate::config::ModelsConfig;
use crate::constants::NONE_SELECTED_MARKER;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum EnabledModels {
    /// No filter: every model is shown. Also what an unconfigured list means.
    #[default]
    AllEnabled,
    /// Explicitly empty: nothing is shown.
    NoneEnabled,
    /// Only these `name@providerId` keys are shown. Never empty.
    Subset(Vec<String>),
}

impl From<Vec<String>> for EnabledModels {
    fn from(keys: Vec<String>) -> Self {
        let has_marker = keys.iter().any(|k| k == NONE_SELECTED_MARKER);
        match (keys.len(), has_marker) {
            (0, _) => Self::AllEnabled,
            (1, true) => Self::NoneEnabled,
            (_, true) => Self::AllEnabled,
            (_, false) => Self::Subset(keys),
        }
    }
}

impl From<EnabledModels> for Vec<String> {
    fn from(enabled: EnabledModels) -> Self {
        match enabled {
            EnabledModels::AllEnabled => Vec::new(),
            EnabledModels::NoneEnabled => vec![NONE_SELECTED_MARKER.to_string()],
            EnabledModels::Subset(keys) => keys,
        }
    }
}

/// Keys of the entries a user can pick from.
fn available_keys(all: &[ModelEntry]) -> Vec<String> {
    all.iter().filter(|m| m.available).map(ModelEntry::key).collect()
}

impl EnabledModels {
    /// `Subset(keys)`, or `NoneEnabled` when `keys` is empty.
    fn subset_or_none(keys: Vec<String>) -> Self {
        if keys.is_empty() {
            Self::NoneEnabled
        } else {
            Self::Subset(keys)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::AllEnabled)
    }

    pub fn is_none_selected(&self) -> bool {
        matches!(self, Self::NoneEnabled)
    }

    /// Whether the entry with `key` passes the filter.
    pub fn is_enabled(&self, key: &str) -> bool {
        match self {
            Self::AllEnabled => true,
            Self::NoneEnabled => false,
            Self::Subset(keys) => keys.iter().any(|k| k == key),
        }
    }

    /// The entries of `models` this selection shows, in input order.
    pub fn filter(&self, models: &[ModelEntry]) -> Vec<ModelEntry> {
        match self {
            Self::AllEnabled => models.to_vec(),
            Self::NoneEnabled => Vec::new(),
            Self::Subset(_) => models
                .iter()
                .filter(|m| self.is_enabled(&m.key()))
                .cloned()
                .collect(),
        }
    }

    /// Enables every available entry of `all` by name.
    pub fn select_all(all: &[ModelEntry]) -> Self {
        Self::from(available_keys(all))
    }

    /// Selects nothing.
    pub fn clear() -> Self {
        Self::NoneEnabled
    }

    /// Swaps enabled and disabled entries among the available ones.
    pub fn invert(&self, all: &[ModelEntry]) -> Self {
        match self {
            Self::AllEnabled => Self::NoneEnabled,
            Self::NoneEnabled => Self::subset_or_none(available_keys(all)),
            Self::Subset(keys) => Self::subset_or_none(
                available_keys(all)
                    .into_iter()
                    .filter(|k| !keys.contains(k))
                    .collect(),
            ),
        }
    }

    /// Turns a single key on or off.
    ///
    /// Switching one entry off while everything is enabled materializes the
    /// full list minus that entry. Removing the last key yields `NoneEnabled`.
    pub fn set_enabled(&self, key: &str, on: bool, all: &[ModelEntry]) -> Self {
        match (self, on) {
            (Self::NoneEnabled, true) => Self::Subset(vec![key.to_string()]),
            (Self::NoneEnabled, false) => Self::NoneEnabled,
            (Self::AllEnabled, true) => Self::select_all(all),
            (Self::AllEnabled, false) => Self::subset_or_none(
                available_keys(all).into_iter().filter(|k| k != key).collect(),
            ),
            (Self::Subset(keys), true) => {
                let mut keys = keys.clone();
                if !keys.iter().any(|k| k == key) {
                    keys.push(key.to_string());
                }
                Self::Subset(keys)
            }
            (Self::Subset(keys), false) => {
                Self::subset_or_none(keys.iter().filter(|k| *k != key).cloned().collect())
            }
        }
    }

    /// One-line description for status output.
    pub fn summary(&self) -> String {
        match self {
            Self::AllEnabled => "showing all models".to_string(),
            Self::NoneEnabled => "no models selected".to_string(),
            Self::Subset(keys) => format!("{} models selected", keys.len()),
        }
    }
}

/// A value recomputed only when its input changes.
pub struct Derived<I, O> {
    input: Option<I>,
    output: Option<O>,
    #[cfg(test)]
    computations: usize,
}

impl<I: PartialEq + Clone, O> Derived<I, O> {
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            #[cfg(test)]
            computations: 0,
        }
    }

    /// Returns the cached output for `input`, computing it on first use or
    /// when `input` differs from the previous call's.
    pub fn get(&mut self, input: &I, compute: impl FnOnce(&I) -> O) -> &O {
        if self.input.as_ref() != Some(input) {
            self.output = None;
            self.input = Some(input.clone());
        }
        #[cfg(test)]
        {
            if self.output.is_none() {
                self.computations += 1;
            }
        }
        self.output.get_or_insert_with(|| compute(input))
    }
}

impl<I: PartialEq + Clone, O> Default for Derived<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq)]
struct CollectInput {
    base: Vec<ModelEntry>,
    custom_models: String,
    default_model: Option<String>,
}

/// The merged model list and its enabled-filtered view, each memoized.
#[derive(Default)]
pub struct ModelView {
    all: Derived<CollectInput, Vec<ModelEntry>>,
    filtered: Derived<(Vec<ModelEntry>, EnabledModels), Vec<ModelEntry>>,
}

impl ModelView {
    pub fn new() -> Self {
        Self::default()
    }

    /// `base` merged with the configured custom models and default model.
    pub fn all_models(&mut self, base: &[ModelEntry], config: &ModelsConfig) -> &[ModelEntry] {
        let input = CollectInput {
            base: base.to_vec(),
            custom_models: config.custom_models.clone().unwrap_or_default(),
            default_model: config.default_model.clone(),
        };
        self.all.get(&input, |i| {
            collect_models(&i.base, &i.custom_models, i.default_model.as_deref())
        })
    }

    /// [`Self::all_models`] narrowed by the configured enabled set.
    pub fn filtered_models(
        &mut self,
        base: &[ModelEntry],
        config: &ModelsConfig,
    ) -> &[ModelEntry] {
        let all = self.all_models(base, config).to_vec();
        let input = (all, config.enabled.clone());
        self.filtered
            .get(&input, |(all, enabled)| enabled.filter(all))
    }
}
