use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub mod reader;
pub mod records;

use records::{validate_record, RawRecord};

use crate::model::observation::{ModelSize, Observation};

/// Columns every dataset export must carry, in canonical order.
pub const EXPECTED_COLUMNS: [&str; 9] = [
    "run_id",
    "task_id",
    "task_label",
    "model",
    "model_size",
    "quality",
    "latency_s",
    "energy_kwh",
    "co2_kg",
];

#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: PathBuf,
    pub observations: Vec<Observation>,
}

impl Dataset {
    pub fn models(&self) -> BTreeSet<&str> {
        self.observations
            .iter()
            .map(|obs| obs.model.as_str())
            .collect()
    }

    pub fn categories(&self) -> BTreeSet<&'static str> {
        self.observations
            .iter()
            .map(|obs| obs.task_category)
            .collect()
    }

    pub fn sizes(&self) -> BTreeSet<ModelSize> {
        self.observations.iter().map(|obs| obs.model_size).collect()
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("missing columns in CSV: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Loads and validates a benchmark export. The whole file is rejected on
/// the first malformed row; ranking a partially loaded dataset would
/// silently shift every min-max normalization behind it.
pub fn load_dataset(path: &Path) -> Result<Dataset, InputError> {
    let text = reader::read_dataset_text(path)?;
    let delimiter = reader::sniff_delimiter(&text);

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let normalized: csv::StringRecord = csv_reader
        .headers()
        .map_err(|e| InputError::Parse(format!("cannot read CSV header: {e}")))?
        .iter()
        .map(|header| header.trim().to_ascii_lowercase())
        .collect();

    let missing: Vec<String> = EXPECTED_COLUMNS
        .iter()
        .filter(|column| !normalized.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(InputError::MissingColumns(missing));
    }
    csv_reader.set_headers(normalized);

    let mut observations = Vec::new();
    for (idx, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let row_no = idx + 1;
        let record = row.map_err(|e| InputError::Parse(format!("row {}: {}", row_no, e)))?;
        observations.push(validate_record(record, row_no)?);
    }
    if observations.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "{} contains a header but no benchmark runs",
            path.display()
        )));
    }

    let dataset = Dataset {
        source: path.to_path_buf(),
        observations,
    };
    info!(
        "loaded {} runs covering {} models and {} task categories from {}",
        dataset.observations.len(),
        dataset.models().len(),
        dataset.categories().len(),
        path.display()
    );
    Ok(dataset)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
