//! Product performance insight core.
//!
//! Pure, synchronous post-processing of an already-fetched product
//! population: statistics, quadrant grouping, representative selection and
//! narrative text. Nothing here is cached; callers memoise on the population.

pub mod analysis;
pub mod config;
pub mod grouping;
pub mod metrics;
pub mod narrative;
pub mod selection;
pub mod statistics;

pub use analysis::{analyze, PerformanceAnalysis, QuadrantInsight};
pub use config::InsightConfig;
pub use metrics::UnitStatus;
pub use selection::RepresentativeProduct;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::dashboards::d410_product_performance::ProductPerformanceRecord;
    use crate::enums::PerformanceCategory;

    pub fn product(sku: &str, revenue: f64, issued: u64, unit_cost: f64) -> ProductPerformanceRecord {
        ProductPerformanceRecord {
            product_id: format!("id-{sku}"),
            sku: sku.to_string(),
            product_name: format!("Produk {sku}"),
            category: None,
            turnover_rate: 1.0,
            revenue_potential: revenue,
            total_issued_30_days: issued,
            average_on_hand: 10.0,
            latest_unit_cost: unit_cost,
            performance_category: PerformanceCategory::Star,
        }
    }

    pub fn with_category(
        mut product: ProductPerformanceRecord,
        category: PerformanceCategory,
    ) -> ProductPerformanceRecord {
        product.performance_category = category;
        product
    }

    pub fn with_turnover(mut product: ProductPerformanceRecord, turnover: f64) -> ProductPerformanceRecord {
        product.turnover_rate = turnover;
        product
    }
}
