use crate::report::{format_f64_6, FilterLabels, RankingContext};

pub fn render_ranking_text(ctx: &RankingContext<'_>) -> String {
    let mut out = String::new();

    out.push_str("ComparIA Weighted Model Ranking\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Inputs\n");
    out.push_str(&format!("Source: {}\n", ctx.source.display()));
    out.push_str(&format!("Runs ranked: {}\n", ctx.runs));
    out.push_str(&format!(
        "Weights: quality={} latency={} energy={} (sum {})\n",
        format_f64_6(ctx.weights.quality.as_f64()),
        format_f64_6(ctx.weights.latency.as_f64()),
        format_f64_6(ctx.weights.energy.as_f64()),
        format_f64_6(ctx.weights.sum()),
    ));
    let filters = FilterLabels::from_selection(ctx.selection);
    out.push_str(&format!("Size filter: {}\n", join_or_all(&filters.sizes)));
    out.push_str(&format!("Model filter: {}\n", join_or_all(&filters.models)));
    out.push_str(&format!(
        "Category filter: {}\n",
        join_or_all(&filters.categories)
    ));
    if ctx.weights.is_zero() {
        out.push_str("Note: all weights are zero; every score is 0 and models are listed by name.\n");
    }
    out.push('\n');

    for (idx, ranking) in ctx.rankings.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 2, ranking.task_category));
        if let Some(winner) = ranking.winner() {
            out.push_str(&format!(
                "Winner: {} ({}), score {}\n",
                winner.model,
                winner.model_size.label(),
                format_f64_6(winner.score.as_f64())
            ));
        }
        let top = ranking.top(ctx.top);
        out.push_str(&format!(
            "Top {} of {}:\n",
            top.len(),
            ranking.entries.len()
        ));
        for (pos, entry) in top.iter().enumerate() {
            out.push_str(&format!(
                "  {:>2}. {:<28} {:<6} score {}  quality {}  latency_s {}  energy_kwh {}\n",
                pos + 1,
                entry.model,
                entry.model_size.label(),
                format_f64_6(entry.score.as_f64()),
                format_f64_6(entry.quality_mean),
                format_f64_6(entry.latency_mean),
                format_f64_6(entry.energy_mean),
            ));
        }
        out.push('\n');
    }

    out
}

fn join_or_all(values: &[String]) -> String {
    if values.is_empty() {
        "all".to_string()
    } else {
        values.join(", ")
    }
}
