use crate::model::categories::task_category;
use crate::model::num::assert_within;
use crate::model::observation::{ModelSize, Observation};
use crate::pipeline::stage3_aggregate::run_stage3;

fn obs(model: &str, size: ModelSize, task_id: u32, quality: f64, latency: f64) -> Observation {
    Observation {
        run_id: 0,
        task_id,
        task_label: format!("task {task_id}"),
        task_category: task_category(task_id),
        model: model.to_string(),
        model_size: size,
        quality,
        latency_s: latency,
        energy_kwh: quality / 1000.0,
        co2_kg: latency / 1000.0,
    }
}

#[test]
fn test_means_per_category_model_size() {
    let observations = vec![
        obs("aurora-7b", ModelSize::Small, 3, 4.0, 2.0),
        obs("aurora-7b", ModelSize::Small, 7, 5.0, 4.0),
        obs("borealis-70b", ModelSize::Large, 3, 4.8, 9.0),
    ];

    let out = run_stage3(&observations);
    assert_eq!(out.models.len(), 2);

    let aurora = &out.models[0];
    assert_eq!(aurora.model, "aurora-7b");
    assert_eq!(aurora.runs, 2);
    assert_within(aurora.quality_mean, 4.5, 1e-12);
    assert_within(aurora.latency_mean, 3.0, 1e-12);
    assert_within(aurora.energy_mean, 0.0045, 1e-12);

    let borealis = &out.models[1];
    assert_eq!(borealis.runs, 1);
    assert_within(borealis.quality_mean, 4.8, 1e-12);
}

#[test]
fn test_groups_split_by_category() {
    let observations = vec![
        obs("aurora-7b", ModelSize::Small, 3, 4.0, 2.0),
        obs("aurora-7b", ModelSize::Small, 12, 3.0, 5.0),
    ];

    let out = run_stage3(&observations);
    assert_eq!(out.models.len(), 2);
    assert_eq!(out.models[0].task_category, "Easy factual & rewriting");
    assert_eq!(out.models[1].task_category, "Reasoning & quantitative");
    assert_within(out.models[0].quality_mean, 4.0, 1e-12);
    assert_within(out.models[1].quality_mean, 3.0, 1e-12);
}

#[test]
fn test_output_order_is_sorted_and_deterministic() {
    let observations = vec![
        obs("zephyr-3b", ModelSize::Small, 16, 3.0, 1.0),
        obs("aurora-7b", ModelSize::Small, 16, 4.0, 2.0),
        obs("aurora-7b", ModelSize::Small, 3, 4.1, 2.1),
    ];

    let a = run_stage3(&observations);
    let b = run_stage3(&observations);

    assert_eq!(a.models[0].task_category, "Easy factual & rewriting");
    assert_eq!(a.models[1].model, "aurora-7b");
    assert_eq!(a.models[2].model, "zephyr-3b");

    for (x, y) in a.models.iter().zip(b.models.iter()) {
        assert_eq!(x.quality_mean.to_bits(), y.quality_mean.to_bits());
        assert_eq!(x.latency_mean.to_bits(), y.latency_mean.to_bits());
        assert_eq!(x.energy_mean.to_bits(), y.energy_mean.to_bits());
    }
}

#[test]
fn test_size_aggregates_pool_models() {
    let observations = vec![
        obs("aurora-7b", ModelSize::Small, 3, 4.0, 2.0),
        obs("nimbus-2b", ModelSize::Small, 3, 2.0, 6.0),
        obs("borealis-70b", ModelSize::Large, 3, 4.8, 9.0),
    ];

    let out = run_stage3(&observations);
    assert_eq!(out.sizes.len(), 2);

    let small = &out.sizes[0];
    assert_eq!(small.model_size, ModelSize::Small);
    assert_eq!(small.runs, 2);
    assert_within(small.quality_mean, 3.0, 1e-12);
    assert_within(small.latency_mean, 4.0, 1e-12);

    let large = &out.sizes[1];
    assert_eq!(large.model_size, ModelSize::Large);
    assert_eq!(large.runs, 1);
    assert_within(large.co2_mean, 0.009, 1e-12);
}

#[test]
fn test_empty_input_yields_empty_output() {
    let out = run_stage3(&[]);
    assert!(out.models.is_empty());
    assert!(out.sizes.is_empty());
}
