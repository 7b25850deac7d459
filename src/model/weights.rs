use thiserror::Error;

use crate::model::num::Normalized;

pub const DEFAULT_QUALITY_WEIGHT: f64 = 0.5;
pub const DEFAULT_LATENCY_WEIGHT: f64 = 0.25;
pub const DEFAULT_ENERGY_WEIGHT: f64 = 0.25;

/// Slack for the sum check so that e.g. 0.5 + 0.25 + 0.25 entered as
/// decimal fractions never trips the budget on rounding noise.
pub const WEIGHT_SUM_EPS: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("{metric} weight {value} is out of range (expected 0.0..=1.0)")]
    OutOfRange { metric: &'static str, value: f64 },
    #[error("weights sum to {sum}, exceeding the 1.0 budget")]
    SumExceedsBudget { sum: f64 },
}

/// User-chosen importance of each metric. Weights are kept exactly as
/// given; a sum below 1.0 deliberately compresses all scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector {
    pub quality: Normalized,
    pub latency: Normalized,
    pub energy: Normalized,
}

impl WeightVector {
    pub fn new(quality: f64, latency: f64, energy: f64) -> Result<WeightVector, WeightError> {
        let quality = check_range("quality", quality)?;
        let latency = check_range("latency", latency)?;
        let energy = check_range("energy", energy)?;
        let sum = quality.as_f64() + latency.as_f64() + energy.as_f64();
        if sum > 1.0 + WEIGHT_SUM_EPS {
            return Err(WeightError::SumExceedsBudget { sum });
        }
        Ok(WeightVector {
            quality,
            latency,
            energy,
        })
    }

    pub fn sum(&self) -> f64 {
        self.quality.as_f64() + self.latency.as_f64() + self.energy.as_f64()
    }

    pub fn is_zero(&self) -> bool {
        self.quality.is_zero() && self.latency.is_zero() && self.energy.is_zero()
    }

    /// Weighted sum of the three normalized terms. Inputs and weights are
    /// in [0,1] and the weights sum to at most 1.0, so the result stays in
    /// [0,1] up to rounding.
    pub fn combine(
        &self,
        quality: Normalized,
        latency: Normalized,
        energy: Normalized,
    ) -> Normalized {
        let raw = self.quality.as_f64() * quality.as_f64()
            + self.latency.as_f64() * latency.as_f64()
            + self.energy.as_f64() * energy.as_f64();
        Normalized::clamped(raw).unwrap_or(Normalized::ZERO)
    }
}

fn check_range(metric: &'static str, value: f64) -> Result<Normalized, WeightError> {
    Normalized::new(value).ok_or(WeightError::OutOfRange { metric, value })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/weights.rs"]
mod tests;
