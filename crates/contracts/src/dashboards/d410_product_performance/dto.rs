use crate::enums::PerformanceCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for the product performance endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformanceRequest {
    /// Restrict the analysis to one warehouse
    pub warehouse_id: Option<String>,
    /// Restrict the analysis to one product family (e.g. "Raw Material")
    pub category: Option<String>,
}

/// One product of a performance analysis run (30-day window)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformanceRecord {
    pub product_id: String,
    pub sku: String,
    pub product_name: String,
    /// Product family, display only
    #[serde(default)]
    pub category: Option<String>,
    /// Inventory turns over the analysis window
    pub turnover_rate: f64,
    /// Monetary value attributable to the product
    pub revenue_potential: f64,
    /// Units issued in the trailing 30 days
    #[serde(rename = "totalIssued30Days")]
    pub total_issued_30_days: u64,
    pub average_on_hand: f64,
    pub latest_unit_cost: f64,
    /// Quadrant assigned upstream. Ground truth for grouping.
    pub performance_category: PerformanceCategory,
}

/// Quadrant counts and medians for a population
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub stars: usize,
    pub cash_cows: usize,
    pub question_marks: usize,
    pub dogs: usize,
    pub median_turnover: f64,
    pub median_revenue: f64,
}

impl PerformanceSummary {
    /// Number of products in the given quadrant
    pub fn count(&self, category: PerformanceCategory) -> usize {
        match category {
            PerformanceCategory::Star => self.stars,
            PerformanceCategory::CashCow => self.cash_cows,
            PerformanceCategory::QuestionMark => self.question_marks,
            PerformanceCategory::Dog => self.dogs,
        }
    }

    pub fn total(&self) -> usize {
        self.stars + self.cash_cows + self.question_marks + self.dogs
    }
}

/// Response of `GET /api/performance/products`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformanceResponse {
    pub products: Vec<ProductPerformanceRecord>,
    pub summary: PerformanceSummary,
}

/// Response of `GET /api/performance/insights`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformanceInsightResponse {
    /// Markdown text generated upstream
    pub insights: String,
    /// RFC 3339 timestamp of the generation
    pub generated_at: String,
}

impl ProductPerformanceInsightResponse {
    /// Parsed generation time, `None` when upstream sent something unparsable
    pub fn generated_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.generated_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
