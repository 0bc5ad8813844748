use super::statistics::PopulationStats;
use crate::dashboards::d410_product_performance::{PerformanceSummary, ProductPerformanceRecord};
use crate::enums::PerformanceCategory;
use serde::{Deserialize, Serialize};

/// Stable partition of a population by its upstream quadrant label.
///
/// All four buckets always exist; input order is kept inside each one.
#[derive(Debug, Clone, Default)]
pub struct CategoryBuckets<'a> {
    pub stars: Vec<&'a ProductPerformanceRecord>,
    pub cash_cows: Vec<&'a ProductPerformanceRecord>,
    pub question_marks: Vec<&'a ProductPerformanceRecord>,
    pub dogs: Vec<&'a ProductPerformanceRecord>,
}

impl<'a> CategoryBuckets<'a> {
    pub fn get(&self, category: PerformanceCategory) -> &[&'a ProductPerformanceRecord] {
        match category {
            PerformanceCategory::Star => &self.stars,
            PerformanceCategory::CashCow => &self.cash_cows,
            PerformanceCategory::QuestionMark => &self.question_marks,
            PerformanceCategory::Dog => &self.dogs,
        }
    }

    fn get_mut(&mut self, category: PerformanceCategory) -> &mut Vec<&'a ProductPerformanceRecord> {
        match category {
            PerformanceCategory::Star => &mut self.stars,
            PerformanceCategory::CashCow => &mut self.cash_cows,
            PerformanceCategory::QuestionMark => &mut self.question_marks,
            PerformanceCategory::Dog => &mut self.dogs,
        }
    }

    pub fn total(&self) -> usize {
        self.stars.len() + self.cash_cows.len() + self.question_marks.len() + self.dogs.len()
    }

    /// Local summary: bucket counts plus the population medians
    pub fn summary(&self, stats: &PopulationStats) -> PerformanceSummary {
        PerformanceSummary {
            stars: self.stars.len(),
            cash_cows: self.cash_cows.len(),
            question_marks: self.question_marks.len(),
            dogs: self.dogs.len(),
            median_turnover: stats.median_turnover,
            median_revenue: stats.median_revenue,
        }
    }
}

pub fn group_by_category(products: &[ProductPerformanceRecord]) -> CategoryBuckets<'_> {
    let mut buckets = CategoryBuckets::default();
    for product in products {
        buckets.get_mut(product.performance_category).push(product);
    }
    buckets
}

/// Quadrant implied by the local medians (`>=` counts as high on both axes)
pub fn expected_category(
    product: &ProductPerformanceRecord,
    median_turnover: f64,
    median_revenue: f64,
) -> PerformanceCategory {
    let high_turnover = product.turnover_rate >= median_turnover;
    let high_revenue = product.revenue_potential >= median_revenue;
    match (high_turnover, high_revenue) {
        (true, true) => PerformanceCategory::Star,
        (false, true) => PerformanceCategory::CashCow,
        (true, false) => PerformanceCategory::QuestionMark,
        (false, false) => PerformanceCategory::Dog,
    }
}

/// Product whose upstream label disagrees with the local medians
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelMismatch {
    pub product_id: String,
    pub sku: String,
    pub upstream: PerformanceCategory,
    pub local: PerformanceCategory,
}

/// Report-only cross-check. The upstream label is never replaced.
pub fn find_label_mismatches(
    products: &[ProductPerformanceRecord],
    stats: &PopulationStats,
) -> Vec<LabelMismatch> {
    products
        .iter()
        .filter_map(|p| {
            let local = expected_category(p, stats.median_turnover, stats.median_revenue);
            (local != p.performance_category).then(|| LabelMismatch {
                product_id: p.product_id.clone(),
                sku: p.sku.clone(),
                upstream: p.performance_category,
                local,
            })
        })
        .collect()
}
