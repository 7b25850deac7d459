use std::collections::BTreeSet;

use thiserror::Error;
use tracing::warn;

use crate::model::observation::{ModelSize, Observation};

#[derive(Debug, Error, PartialEq)]
pub enum Stage2Error {
    #[error("no benchmark runs match the active filters")]
    EmptySelection,
}

/// Which slice of the dataset to rank. Empty sets mean unrestricted;
/// model and category names match case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub sizes: BTreeSet<ModelSize>,
    pub models: BTreeSet<String>,
    pub categories: BTreeSet<String>,
}

impl FilterSelection {
    pub fn from_args(sizes: &[ModelSize], models: &[String], categories: &[String]) -> Self {
        FilterSelection {
            sizes: sizes.iter().copied().collect(),
            models: models.iter().map(|m| m.to_lowercase()).collect(),
            categories: categories.iter().map(|c| c.to_lowercase()).collect(),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.sizes.is_empty() && self.models.is_empty() && self.categories.is_empty()
    }

    fn keeps(&self, obs: &Observation) -> bool {
        if !self.sizes.is_empty() && !self.sizes.contains(&obs.model_size) {
            return false;
        }
        if !self.models.is_empty() && !self.models.contains(&obs.model.to_lowercase()) {
            return false;
        }
        if !self.categories.is_empty()
            && !self.categories.contains(&obs.task_category.to_lowercase())
        {
            return false;
        }
        true
    }
}

pub fn run_stage2(
    observations: &[Observation],
    selection: &FilterSelection,
) -> Result<Vec<Observation>, Stage2Error> {
    warn_unmatched(observations, selection);

    let kept: Vec<Observation> = observations
        .iter()
        .filter(|obs| selection.keeps(obs))
        .cloned()
        .collect();

    if kept.is_empty() {
        return Err(Stage2Error::EmptySelection);
    }
    Ok(kept)
}

/// A filter value that matches nothing is usually a typo; the run still
/// proceeds on whatever the remaining values select.
fn warn_unmatched(observations: &[Observation], selection: &FilterSelection) {
    let present_sizes: BTreeSet<ModelSize> =
        observations.iter().map(|obs| obs.model_size).collect();
    let present_models: BTreeSet<String> = observations
        .iter()
        .map(|obs| obs.model.to_lowercase())
        .collect();
    let present_categories: BTreeSet<String> = observations
        .iter()
        .map(|obs| obs.task_category.to_lowercase())
        .collect();

    for size in &selection.sizes {
        if !present_sizes.contains(size) {
            warn!("size filter {} matches no runs in the dataset", size.label());
        }
    }
    for model in &selection.models {
        if !present_models.contains(model) {
            warn!("model filter {:?} matches no runs in the dataset", model);
        }
    }
    for category in &selection.categories {
        if !present_categories.contains(category) {
            warn!(
                "category filter {:?} matches no runs in the dataset",
                category
            );
        }
    }
}
