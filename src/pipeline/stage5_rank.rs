use std::collections::BTreeMap;

use crate::model::num::Normalized;
use crate::model::observation::ModelSize;
use crate::model::weights::WeightVector;
use crate::pipeline::stage3_aggregate::Aggregate;
use crate::pipeline::stage4_normalize::run_stage4;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub task_category: String,
    pub model: String,
    pub model_size: ModelSize,
    pub quality_mean: f64,
    pub latency_mean: f64,
    pub energy_mean: f64,
    pub score: Normalized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRanking {
    pub task_category: String,
    /// Sorted by score descending; ties broken by model name, then size.
    pub entries: Vec<RankedEntry>,
}

impl CategoryRanking {
    pub fn winner(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn top(&self, n: usize) -> &[RankedEntry] {
        &self.entries[..self.entries.len().min(n)]
    }
}

/// Scores one comparison set. Every aggregate handed in is normalized
/// against the same bounds, so this must be called with exactly the
/// aggregates competing in one task category.
pub fn rank_category(aggregates: &[Aggregate], weights: &WeightVector) -> Vec<RankedEntry> {
    let Some(bounds) = run_stage4(aggregates) else {
        return Vec::new();
    };

    let mut entries: Vec<RankedEntry> = aggregates
        .iter()
        .map(|agg| {
            let quality = bounds.quality.normalize(agg.quality_mean);
            let latency = bounds.latency.normalize_inverted(agg.latency_mean);
            let energy = bounds.energy.normalize_inverted(agg.energy_mean);
            RankedEntry {
                task_category: agg.task_category.clone(),
                model: agg.model.clone(),
                model_size: agg.model_size,
                quality_mean: agg.quality_mean,
                latency_mean: agg.latency_mean,
                energy_mean: agg.energy_mean,
                score: weights.combine(quality, latency, energy),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.model.cmp(&b.model))
            .then_with(|| a.model_size.cmp(&b.model_size))
    });
    entries
}

pub fn run_stage5(aggregates: &[Aggregate], weights: &WeightVector) -> Vec<CategoryRanking> {
    let mut groups: BTreeMap<&str, Vec<Aggregate>> = BTreeMap::new();
    for agg in aggregates {
        groups
            .entry(agg.task_category.as_str())
            .or_default()
            .push(agg.clone());
    }

    groups
        .into_iter()
        .map(|(category, group)| CategoryRanking {
            task_category: category.to_string(),
            entries: rank_category(&group, weights),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_rank.rs"]
mod tests;
