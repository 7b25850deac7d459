use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::observation::ModelSize;
use crate::model::weights::WeightVector;
use crate::pipeline::stage2_filter::FilterSelection;
use crate::pipeline::stage3_aggregate::{Aggregate, SizeAggregate};
use crate::pipeline::stage5_rank::run_stage5;
use crate::pipeline::stage6_report::{write_averages, write_reports};
use crate::report::export::{read_ranking_csv, AVERAGES_HEADER};
use crate::report::{format_f64_6, RankingContext};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("comparia_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn agg(category: &str, model: &str, quality: f64, latency: f64, energy: f64) -> Aggregate {
    Aggregate {
        task_category: category.to_string(),
        model: model.to_string(),
        model_size: ModelSize::Small,
        quality_mean: quality,
        latency_mean: latency,
        energy_mean: energy,
        co2_mean: 0.0011,
        runs: 3,
    }
}

#[test]
fn test_write_reports_creates_all_outputs() {
    let aggregates = vec![
        agg("Easy factual & rewriting", "aurora-7b", 4.5, 2.0, 0.010),
        agg("Easy factual & rewriting", "borealis-70b", 3.5, 1.0, 0.005),
        agg("Reasoning & quantitative", "aurora-7b", 3.9, 3.0, 0.012),
        agg("Reasoning & quantitative", "borealis-70b", 4.6, 2.0, 0.031),
    ];
    let weights = WeightVector::new(0.5, 0.25, 0.25).unwrap();
    let rankings = run_stage5(&aggregates, &weights);
    let selection = FilterSelection::default();
    let ctx = RankingContext {
        rankings: &rankings,
        weights: &weights,
        selection: &selection,
        top: 5,
        source: Path::new("runs.csv"),
        runs: 12,
        tool_name: "comparia".to_string(),
        tool_version: "0.1.0".to_string(),
    };

    let out_dir = make_temp_dir().join("report").join("nested");
    write_reports(&ctx, &out_dir).unwrap();

    assert!(out_dir.join("ranking.csv").exists());
    assert!(out_dir.join("report.txt").exists());
    assert!(out_dir.join("summary.json").exists());

    let report = fs::read_to_string(out_dir.join("report.txt")).unwrap();
    assert!(report.contains("2. Easy factual & rewriting"));
    assert!(report.contains("3. Reasoning & quantitative"));
    assert!(report.contains("Winner:"));

    let summary = fs::read_to_string(out_dir.join("summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&summary).unwrap();
    assert_eq!(value["dataset"]["task_categories"], 2);
    assert_eq!(value["categories"][1]["winner"]["model"], "borealis-70b");
}

#[test]
fn test_ranking_csv_round_trip_at_six_decimals() {
    let aggregates = vec![
        agg("Easy factual & rewriting", "aurora-7b", 4.31, 2.77, 0.0101),
        agg("Easy factual & rewriting", "borealis-70b", 3.89, 1.31, 0.0047),
        agg("Easy factual & rewriting", "cirrus-13b", 4.02, 5.09, 0.0212),
    ];
    let weights = WeightVector::new(0.4, 0.3, 0.3).unwrap();
    let rankings = run_stage5(&aggregates, &weights);
    let out_dir = make_temp_dir();
    let ctx = RankingContext {
        rankings: &rankings,
        weights: &weights,
        selection: &FilterSelection::default(),
        top: 5,
        source: Path::new("runs.csv"),
        runs: 9,
        tool_name: "comparia".to_string(),
        tool_version: "0.1.0".to_string(),
    };
    write_reports(&ctx, &out_dir).unwrap();

    let rows = read_ranking_csv(&out_dir.join("ranking.csv")).unwrap();
    let entries: Vec<_> = rankings.iter().flat_map(|r| r.entries.iter()).collect();
    assert_eq!(rows.len(), entries.len());

    for (row, entry) in rows.iter().zip(entries.iter()) {
        assert_eq!(row.task_category, entry.task_category);
        assert_eq!(row.model, entry.model);
        assert_eq!(row.model_size, entry.model_size.label());
        assert_eq!(format_f64_6(row.quality_mean), format_f64_6(entry.quality_mean));
        assert_eq!(format_f64_6(row.latency_mean), format_f64_6(entry.latency_mean));
        assert_eq!(format_f64_6(row.energy_mean), format_f64_6(entry.energy_mean));
        assert_eq!(format_f64_6(row.score), format_f64_6(entry.score.as_f64()));
    }

    // Rows keep the ranked order.
    assert!(rows[0].score >= rows[1].score);
    assert!(rows[1].score >= rows[2].score);
}

#[test]
fn test_write_averages_csv() {
    let aggregates = vec![
        SizeAggregate {
            task_category: "Easy factual & rewriting".to_string(),
            model_size: ModelSize::Small,
            quality_mean: 4.125,
            latency_mean: 1.75,
            energy_mean: 0.004,
            co2_mean: 0.0012,
            runs: 8,
        },
        SizeAggregate {
            task_category: "Easy factual & rewriting".to_string(),
            model_size: ModelSize::Large,
            quality_mean: 4.75,
            latency_mean: 7.5,
            energy_mean: 0.026,
            co2_mean: 0.0078,
            runs: 4,
        },
    ];

    let out_dir = make_temp_dir();
    write_averages(&aggregates, &out_dir).unwrap();

    let path = out_dir.join("averages.csv");
    assert!(path.exists());

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let expected: Vec<&str> = AVERAGES_HEADER.to_vec();
    let got: Vec<&str> = headers.iter().collect();
    assert_eq!(got, expected);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "Small");
    assert_eq!(&rows[0][2], "4.125000");
    assert_eq!(&rows[1][1], "Large");
    assert_eq!(&rows[1][5], "0.007800");
    assert_eq!(&rows[1][6], "4");
}
