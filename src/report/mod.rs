use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub mod export;
pub mod json;
pub mod text;

use crate::model::weights::WeightVector;
use crate::pipeline::stage2_filter::FilterSelection;
use crate::pipeline::stage5_rank::CategoryRanking;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the renderers need about one ranking run.
#[derive(Debug, Clone)]
pub struct RankingContext<'a> {
    pub rankings: &'a [CategoryRanking],
    pub weights: &'a WeightVector,
    pub selection: &'a FilterSelection,
    pub top: usize,
    pub source: &'a Path,
    pub runs: usize,
    pub tool_name: String,
    pub tool_version: String,
}

/// Filter values in display form. Empty lists mean unrestricted.
#[derive(Debug, Clone, Serialize)]
pub struct FilterLabels {
    pub sizes: Vec<String>,
    pub models: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterLabels {
    pub fn from_selection(selection: &FilterSelection) -> Self {
        FilterLabels {
            sizes: selection
                .sizes
                .iter()
                .map(|size| size.label().to_string())
                .collect(),
            models: selection.models.iter().cloned().collect(),
            categories: selection.categories.iter().cloned().collect(),
        }
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}
