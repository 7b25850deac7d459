use serde::Serialize;

/// Coarse model size class carried by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ModelSize {
    Small,
    Medium,
    Large,
}

impl ModelSize {
    pub fn parse(value: &str) -> Option<ModelSize> {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" | "s" => Some(ModelSize::Small),
            "medium" | "m" => Some(ModelSize::Medium),
            "large" | "l" => Some(ModelSize::Large),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelSize::Small => "Small",
            ModelSize::Medium => "Medium",
            ModelSize::Large => "Large",
        }
    }
}

/// One benchmark run, immutable once loaded from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub run_id: u64,
    pub task_id: u32,
    pub task_label: String,
    pub task_category: &'static str,
    pub model: String,
    pub model_size: ModelSize,
    pub quality: f64,
    pub latency_s: f64,
    pub energy_kwh: f64,
    pub co2_kg: f64,
}
