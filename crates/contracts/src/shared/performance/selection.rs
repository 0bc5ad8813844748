//! Representative products per quadrant.
//!
//! Selections are display-only examples. They never feed back into the
//! quadrant label of a product.

use super::config::UnitEconomicsConfig;
use super::metrics::{unit_status, unit_value, UnitStatus};
use crate::dashboards::d410_product_performance::ProductPerformanceRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Owned display form of a picked product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentativeProduct {
    pub product_id: String,
    pub sku: String,
    pub product_name: String,
    pub revenue_potential: f64,
    pub total_issued_30_days: u64,
    pub unit_value: f64,
    pub unit_status: UnitStatus,
}

impl RepresentativeProduct {
    pub fn from_record(product: &ProductPerformanceRecord, cfg: &UnitEconomicsConfig) -> Self {
        Self {
            product_id: product.product_id.clone(),
            sku: product.sku.clone(),
            product_name: product.product_name.clone(),
            revenue_potential: product.revenue_potential,
            total_issued_30_days: product.total_issued_30_days,
            unit_value: unit_value(product),
            unit_status: unit_status(product, cfg),
        }
    }

    /// `productName (sku)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.product_name, self.sku)
    }
}

/// Picked examples plus whether the primary criterion came up empty
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub items: Vec<&'a ProductPerformanceRecord>,
    pub fallback: bool,
}

impl<'a> Selection<'a> {
    fn primary(items: Vec<&'a ProductPerformanceRecord>) -> Self {
        Self {
            items,
            fallback: false,
        }
    }

    fn fallback(items: Vec<&'a ProductPerformanceRecord>) -> Self {
        Self {
            items,
            fallback: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_representatives(&self, cfg: &UnitEconomicsConfig) -> Vec<RepresentativeProduct> {
        self.items
            .iter()
            .map(|p| RepresentativeProduct::from_record(p, cfg))
            .collect()
    }
}

/// `slice::sort_by` is stable, so equal keys keep their bucket order.
fn sorted_by_key<'a>(
    bucket: &[&'a ProductPerformanceRecord],
    key: impl Fn(&ProductPerformanceRecord) -> f64,
    descending: bool,
) -> Vec<&'a ProductPerformanceRecord> {
    let mut sorted = bucket.to_vec();
    sorted.sort_by(|a, b| {
        let ord = key(*a).total_cmp(&key(*b));
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    sorted
}

fn issued(p: &ProductPerformanceRecord) -> f64 {
    p.total_issued_30_days as f64
}

fn revenue(p: &ProductPerformanceRecord) -> f64 {
    p.revenue_potential
}

/// Stars and Cash Cows: highest revenue potential first.
pub fn top_by_revenue<'a>(bucket: &[&'a ProductPerformanceRecord], n: usize) -> Selection<'a> {
    let mut items = sorted_by_key(bucket, revenue, true);
    items.truncate(n);
    Selection::primary(items)
}

/// Question Marks: fast movers (issued at or above the population median)
/// whose unit economics are not healthy, busiest first.
///
/// When nothing qualifies, the first `n` of the bucket are shown instead.
pub fn pick_underperforming_fast<'a>(
    bucket: &[&'a ProductPerformanceRecord],
    median_issued: f64,
    cfg: &UnitEconomicsConfig,
    n: usize,
) -> Selection<'a> {
    let candidates: Vec<&'a ProductPerformanceRecord> = bucket
        .iter()
        .copied()
        .filter(|p| issued(p) >= median_issued && !unit_status(p, cfg).is_healthy())
        .collect();

    if candidates.is_empty() {
        if !bucket.is_empty() {
            log::debug!("question marks: no fast thin-margin product, showing first {}", n);
        }
        return Selection::fallback(bucket.iter().copied().take(n).collect());
    }

    let mut items = sorted_by_key(&candidates, issued, true);
    items.truncate(n);
    Selection::primary(items)
}

/// Dogs: products in the bottom half on both revenue and issuance.
///
/// The bottom half is `max(1, len / 2)` products. Candidates keep the
/// issuance-ascending order. With an empty intersection the bottom half by
/// revenue is used directly.
pub fn pick_low_contribution<'a>(
    bucket: &[&'a ProductPerformanceRecord],
    n: usize,
) -> Selection<'a> {
    if bucket.is_empty() {
        return Selection::primary(Vec::new());
    }

    let half = (bucket.len() / 2).max(1);
    let by_revenue = sorted_by_key(bucket, revenue, false);
    let by_issued = sorted_by_key(bucket, issued, false);

    let low_revenue: HashSet<&str> = by_revenue
        .iter()
        .take(half)
        .map(|p| p.sku.as_str())
        .collect();

    let items: Vec<&'a ProductPerformanceRecord> = by_issued
        .into_iter()
        .take(half)
        .filter(|p| low_revenue.contains(p.sku.as_str()))
        .take(n)
        .collect();

    if !items.is_empty() {
        return Selection::primary(items);
    }

    log::debug!("dogs: revenue and issuance bottom halves do not intersect");
    Selection::fallback(by_revenue.into_iter().take(half.min(n)).collect())
}
