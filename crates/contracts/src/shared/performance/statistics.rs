//! Population statistics used for thresholding.
//!
//! Medians here are positional: `sorted[len / 2]` on the ascending sort.
//! For even lengths this is the upper of the two middle elements, not their
//! average. Downstream `>= median` comparisons depend on this exact value.

use crate::dashboards::d410_product_performance::ProductPerformanceRecord;
use serde::{Deserialize, Serialize};

fn sorted_ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Positional median. Empty input yields `0.0`.
pub fn median(values: &[f64]) -> f64 {
    let sorted = sorted_ascending(values);
    sorted.get(sorted.len() / 2).copied().unwrap_or(0.0)
}

/// Positional quartiles of a population
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

/// Quartiles picked at `len/4`, `len/2` and `3*len/4`. All zero for empty input.
pub fn quartiles(values: &[f64]) -> Quartiles {
    let sorted = sorted_ascending(values);
    let n = sorted.len();
    if n == 0 {
        return Quartiles::default();
    }
    Quartiles {
        q1: sorted[n / 4],
        q2: sorted[n / 2],
        q3: sorted[(3 * n) / 4],
    }
}

/// Statistics over the full product population of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationStats {
    pub product_count: usize,
    pub median_turnover: f64,
    pub median_revenue: f64,
    pub median_issued: f64,
    pub revenue_quartiles: Quartiles,
}

impl PopulationStats {
    pub fn from_records(records: &[ProductPerformanceRecord]) -> Self {
        let turnover: Vec<f64> = records.iter().map(|r| r.turnover_rate).collect();
        let revenue: Vec<f64> = records.iter().map(|r| r.revenue_potential).collect();
        let issued: Vec<f64> = records
            .iter()
            .map(|r| r.total_issued_30_days as f64)
            .collect();

        Self {
            product_count: records.len(),
            median_turnover: median(&turnover),
            median_revenue: median(&revenue),
            median_issued: median(&issued),
            revenue_quartiles: quartiles(&revenue),
        }
    }
}
