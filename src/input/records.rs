use serde::Deserialize;
use tracing::warn;

use crate::input::InputError;
use crate::model::categories::task_category;
use crate::model::observation::{ModelSize, Observation};

/// One CSV row exactly as exported, before validation.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    pub run_id: u64,
    pub task_id: u32,
    pub task_label: String,
    pub model: String,
    pub model_size: String,
    pub quality: f64,
    pub latency_s: f64,
    pub energy_kwh: f64,
    pub co2_kg: f64,
}

pub const QUALITY_MIN: f64 = 1.0;
pub const QUALITY_MAX: f64 = 5.0;

/// Validates a raw row. `row` is the 1-based data row number used in
/// error messages, counting from the first line after the header.
pub fn validate_record(record: RawRecord, row: usize) -> Result<Observation, InputError> {
    let model_size = ModelSize::parse(&record.model_size).ok_or_else(|| {
        InputError::InvalidInput(format!(
            "row {}: unknown model_size {:?} (expected small, medium or large)",
            row, record.model_size
        ))
    })?;

    if record.model.trim().is_empty() {
        return Err(InputError::InvalidInput(format!(
            "row {}: empty model name",
            row
        )));
    }

    check_finite(row, "quality", record.quality)?;
    check_non_negative(row, "latency_s", record.latency_s)?;
    check_non_negative(row, "energy_kwh", record.energy_kwh)?;
    check_non_negative(row, "co2_kg", record.co2_kg)?;

    if record.quality < QUALITY_MIN || record.quality > QUALITY_MAX {
        warn!(
            "row {}: quality {} outside the expected {}..={} scale; keeping as-is",
            row, record.quality, QUALITY_MIN, QUALITY_MAX
        );
    }

    Ok(Observation {
        run_id: record.run_id,
        task_id: record.task_id,
        task_label: record.task_label,
        task_category: task_category(record.task_id),
        model: record.model,
        model_size,
        quality: record.quality,
        latency_s: record.latency_s,
        energy_kwh: record.energy_kwh,
        co2_kg: record.co2_kg,
    })
}

fn check_finite(row: usize, column: &str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::InvalidInput(format!(
            "row {}: {} is {} (expected a finite number)",
            row, column, value
        )));
    }
    Ok(())
}

fn check_non_negative(row: usize, column: &str, value: f64) -> Result<(), InputError> {
    check_finite(row, column, value)?;
    if value < 0.0 {
        return Err(InputError::InvalidInput(format!(
            "row {}: {} is negative ({})",
            row, column, value
        )));
    }
    Ok(())
}
