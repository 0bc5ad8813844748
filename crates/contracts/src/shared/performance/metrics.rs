use super::config::UnitEconomicsConfig;
use crate::dashboards::d410_product_performance::ProductPerformanceRecord;
use serde::{Deserialize, Serialize};

/// Per-unit revenue versus latest unit cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    BelowCost,
    Thin,
    Healthy,
    /// Only produced when `flag_zero_issuance` is enabled
    NoSalesData,
}

impl UnitStatus {
    pub fn code(&self) -> &'static str {
        match self {
            UnitStatus::BelowCost => "below_cost",
            UnitStatus::Thin => "thin",
            UnitStatus::Healthy => "healthy",
            UnitStatus::NoSalesData => "no_sales_data",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, UnitStatus::Healthy)
    }
}

/// Revenue per issued unit. Zero issuance divides by 1, so the whole
/// revenue potential becomes the unit value.
pub fn unit_value(product: &ProductPerformanceRecord) -> f64 {
    product.revenue_potential / product.total_issued_30_days.max(1) as f64
}

/// Classify a unit value against a unit cost.
///
/// A cost of 0 makes both bands 0, so no unit value can fall below them and
/// the result is `Healthy`.
pub fn classify_unit_value(value: f64, unit_cost: f64, cfg: &UnitEconomicsConfig) -> UnitStatus {
    if value < unit_cost * cfg.below_cost_ratio {
        UnitStatus::BelowCost
    } else if value < unit_cost * cfg.thin_margin_ratio {
        UnitStatus::Thin
    } else {
        UnitStatus::Healthy
    }
}

pub fn unit_status(product: &ProductPerformanceRecord, cfg: &UnitEconomicsConfig) -> UnitStatus {
    if cfg.flag_zero_issuance && product.total_issued_30_days == 0 {
        return UnitStatus::NoSalesData;
    }
    classify_unit_value(unit_value(product), product.latest_unit_cost, cfg)
}
