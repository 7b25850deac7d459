use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::pipeline::stage3_aggregate::SizeAggregate;
use crate::report::export::{write_averages_csv, write_ranking_csv};
use crate::report::json::render_summary_json;
use crate::report::text::render_ranking_text;
use crate::report::{RankingContext, ReportError};

/// Writes ranking.csv, report.txt and summary.json into `out_dir`,
/// creating it if needed.
pub fn write_reports(ctx: &RankingContext<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let ranking_path = out_dir.join("ranking.csv");
    write_ranking_csv(&ranking_path, ctx.rankings)?;
    info!("wrote {}", ranking_path.display());

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_ranking_text(ctx))?;
    info!("wrote {}", report_path.display());

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(ctx)?)?;
    info!("wrote {}", summary_path.display());

    Ok(())
}

pub fn write_averages(aggregates: &[SizeAggregate], out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let averages_path = out_dir.join("averages.csv");
    write_averages_csv(&averages_path, aggregates)?;
    info!("wrote {}", averages_path.display());

    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
