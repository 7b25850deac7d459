use std::path::Path;

use serde::Deserialize;

use crate::pipeline::stage3_aggregate::SizeAggregate;
use crate::pipeline::stage5_rank::CategoryRanking;
use crate::report::{format_f64_6, ReportError};

pub const RANKING_HEADER: [&str; 7] = [
    "task_category",
    "model",
    "model_size",
    "quality_mean",
    "latency_mean",
    "energy_mean",
    "score",
];

pub const AVERAGES_HEADER: [&str; 7] = [
    "task_category",
    "model_size",
    "quality_mean",
    "latency_mean",
    "energy_mean",
    "co2_mean",
    "runs",
];

/// A row of ranking.csv as read back from disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankingRow {
    pub task_category: String,
    pub model: String,
    pub model_size: String,
    pub quality_mean: f64,
    pub latency_mean: f64,
    pub energy_mean: f64,
    pub score: f64,
}

/// Writes the full ranking, all categories concatenated, already in
/// ranked order. Numbers are fixed to six decimals so repeat runs diff
/// cleanly.
pub fn write_ranking_csv(path: &Path, rankings: &[CategoryRanking]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(RANKING_HEADER)?;
    for ranking in rankings {
        for entry in &ranking.entries {
            let quality = format_f64_6(entry.quality_mean);
            let latency = format_f64_6(entry.latency_mean);
            let energy = format_f64_6(entry.energy_mean);
            let score = format_f64_6(entry.score.as_f64());
            writer.write_record([
                entry.task_category.as_str(),
                entry.model.as_str(),
                entry.model_size.label(),
                quality.as_str(),
                latency.as_str(),
                energy.as_str(),
                score.as_str(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn read_ranking_csv(path: &Path) -> Result<Vec<RankingRow>, ReportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<RankingRow>, _>>()?;
    Ok(rows)
}

pub fn write_averages_csv(path: &Path, aggregates: &[SizeAggregate]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(AVERAGES_HEADER)?;
    for agg in aggregates {
        let quality = format_f64_6(agg.quality_mean);
        let latency = format_f64_6(agg.latency_mean);
        let energy = format_f64_6(agg.energy_mean);
        let co2 = format_f64_6(agg.co2_mean);
        let runs = agg.runs.to_string();
        writer.write_record([
            agg.task_category.as_str(),
            agg.model_size.label(),
            quality.as_str(),
            latency.as_str(),
            energy.as_str(),
            co2.as_str(),
            runs.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
