use serde::Serialize;

use crate::report::{FilterLabels, RankingContext};

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub tool: ToolInfo,
    pub dataset: DatasetInfo,
    pub weights: WeightsInfo,
    pub filters: FilterLabels,
    pub top: usize,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub source: String,
    pub runs: usize,
    pub task_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct WeightsInfo {
    pub quality: f64,
    pub latency: f64,
    pub energy: f64,
    pub sum: f64,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub task_category: String,
    pub models_ranked: usize,
    pub winner: Option<WinnerInfo>,
}

#[derive(Debug, Serialize)]
pub struct WinnerInfo {
    pub model: String,
    pub model_size: String,
    pub score: f64,
}

pub fn build_summary(ctx: &RankingContext<'_>) -> RunSummary {
    let categories = ctx
        .rankings
        .iter()
        .map(|ranking| CategorySummary {
            task_category: ranking.task_category.clone(),
            models_ranked: ranking.entries.len(),
            winner: ranking.winner().map(|winner| WinnerInfo {
                model: winner.model.clone(),
                model_size: winner.model_size.label().to_string(),
                score: winner.score.as_f64(),
            }),
        })
        .collect();

    RunSummary {
        tool: ToolInfo {
            name: ctx.tool_name.clone(),
            version: ctx.tool_version.clone(),
        },
        dataset: DatasetInfo {
            source: ctx.source.display().to_string(),
            runs: ctx.runs,
            task_categories: ctx.rankings.len(),
        },
        weights: WeightsInfo {
            quality: ctx.weights.quality.as_f64(),
            latency: ctx.weights.latency.as_f64(),
            energy: ctx.weights.energy.as_f64(),
            sum: ctx.weights.sum(),
        },
        filters: FilterLabels::from_selection(ctx.selection),
        top: ctx.top,
        categories,
    }
}

pub fn render_summary_json(ctx: &RankingContext<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&build_summary(ctx))
}
