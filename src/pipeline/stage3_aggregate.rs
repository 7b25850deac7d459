use std::collections::BTreeMap;

use crate::model::observation::{ModelSize, Observation};

/// Per (task_category, model, model_size) means over all runs in the
/// filtered subset. Ranking consumes these, never raw runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub task_category: String,
    pub model: String,
    pub model_size: ModelSize,
    pub quality_mean: f64,
    pub latency_mean: f64,
    pub energy_mean: f64,
    pub co2_mean: f64,
    pub runs: usize,
}

/// Per (task_category, model_size) means pooled across models, for the
/// averages export.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeAggregate {
    pub task_category: String,
    pub model_size: ModelSize,
    pub quality_mean: f64,
    pub latency_mean: f64,
    pub energy_mean: f64,
    pub co2_mean: f64,
    pub runs: usize,
}

#[derive(Debug)]
pub struct Stage3Output {
    pub models: Vec<Aggregate>,
    pub sizes: Vec<SizeAggregate>,
}

#[derive(Debug, Default, Clone, Copy)]
struct MeanAcc {
    quality: f64,
    latency: f64,
    energy: f64,
    co2: f64,
    runs: usize,
}

impl MeanAcc {
    fn add(&mut self, obs: &Observation) {
        self.quality += obs.quality;
        self.latency += obs.latency_s;
        self.energy += obs.energy_kwh;
        self.co2 += obs.co2_kg;
        self.runs += 1;
    }

    fn mean(sum: f64, runs: usize) -> f64 {
        sum / runs as f64
    }
}

pub fn run_stage3(observations: &[Observation]) -> Stage3Output {
    let mut by_model: BTreeMap<(&str, &str, ModelSize), MeanAcc> = BTreeMap::new();
    let mut by_size: BTreeMap<(&str, ModelSize), MeanAcc> = BTreeMap::new();

    for obs in observations {
        by_model
            .entry((obs.task_category, obs.model.as_str(), obs.model_size))
            .or_default()
            .add(obs);
        by_size
            .entry((obs.task_category, obs.model_size))
            .or_default()
            .add(obs);
    }

    let models = by_model
        .into_iter()
        .map(|((category, model, size), acc)| Aggregate {
            task_category: category.to_string(),
            model: model.to_string(),
            model_size: size,
            quality_mean: MeanAcc::mean(acc.quality, acc.runs),
            latency_mean: MeanAcc::mean(acc.latency, acc.runs),
            energy_mean: MeanAcc::mean(acc.energy, acc.runs),
            co2_mean: MeanAcc::mean(acc.co2, acc.runs),
            runs: acc.runs,
        })
        .collect();

    let sizes = by_size
        .into_iter()
        .map(|((category, size), acc)| SizeAggregate {
            task_category: category.to_string(),
            model_size: size,
            quality_mean: MeanAcc::mean(acc.quality, acc.runs),
            latency_mean: MeanAcc::mean(acc.latency, acc.runs),
            energy_mean: MeanAcc::mean(acc.energy, acc.runs),
            co2_mean: MeanAcc::mean(acc.co2, acc.runs),
            runs: acc.runs,
        })
        .collect();

    Stage3Output { models, sizes }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
