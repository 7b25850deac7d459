use crate::model::num::Normalized;
use crate::pipeline::stage3_aggregate::Aggregate;

/// Min-max bounds of one metric across the aggregates being compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricBounds {
    pub min: f64,
    pub max: f64,
}

impl MetricBounds {
    pub fn fit(values: impl IntoIterator<Item = f64>) -> Option<MetricBounds> {
        let mut bounds: Option<MetricBounds> = None;
        for value in values {
            bounds = Some(match bounds {
                None => MetricBounds {
                    min: value,
                    max: value,
                },
                Some(b) => MetricBounds {
                    min: b.min.min(value),
                    max: b.max.max(value),
                },
            });
        }
        bounds
    }

    /// A spread of zero makes min-max scaling meaningless; the whole
    /// metric term becomes 0 so it drops out of the score.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn normalize(&self, value: f64) -> Normalized {
        if self.is_degenerate() {
            return Normalized::ZERO;
        }
        let scaled = (value - self.min) / (self.max - self.min);
        Normalized::clamped(scaled).unwrap_or(Normalized::ZERO)
    }

    /// For lower-is-better metrics. Degenerate bounds still map to 0, not
    /// 1; a metric with no spread must not reward anyone.
    pub fn normalize_inverted(&self, value: f64) -> Normalized {
        if self.is_degenerate() {
            return Normalized::ZERO;
        }
        self.normalize(value).inverted()
    }
}

/// Bounds for the three scored metrics, fitted over one comparison set
/// (one task category of the filtered subset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBounds {
    pub quality: MetricBounds,
    pub latency: MetricBounds,
    pub energy: MetricBounds,
}

pub fn run_stage4(aggregates: &[Aggregate]) -> Option<CategoryBounds> {
    Some(CategoryBounds {
        quality: MetricBounds::fit(aggregates.iter().map(|a| a.quality_mean))?,
        latency: MetricBounds::fit(aggregates.iter().map(|a| a.latency_mean))?,
        energy: MetricBounds::fit(aggregates.iter().map(|a| a.energy_mean))?,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_normalize.rs"]
mod tests;
