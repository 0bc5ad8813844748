use super::config::InsightConfig;
use super::grouping::{find_label_mismatches, group_by_category, CategoryBuckets};
use super::narrative::compose_narrative;
use super::selection::{
    pick_low_contribution, pick_underperforming_fast, top_by_revenue, RepresentativeProduct,
    Selection,
};
use super::statistics::PopulationStats;
use crate::dashboards::d410_product_performance::{PerformanceSummary, ProductPerformanceRecord};
use crate::enums::PerformanceCategory;
use serde::{Deserialize, Serialize};

/// Narrative block for one quadrant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantInsight {
    pub category: PerformanceCategory,
    /// Products carrying this upstream label
    pub product_count: usize,
    pub representatives: Vec<RepresentativeProduct>,
    /// Representatives came from the selector's fallback path
    pub fallback: bool,
    pub narrative: String,
}

/// Full result of one analysis pass over a population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAnalysis {
    /// Counts and medians recomputed locally
    pub summary: PerformanceSummary,
    pub stats: PopulationStats,
    /// Always four entries, in `PerformanceCategory::all()` order
    pub quadrants: Vec<QuadrantInsight>,
    /// Products whose upstream label disagrees with the local medians
    pub label_mismatches: usize,
}

impl PerformanceAnalysis {
    pub fn quadrant(&self, category: PerformanceCategory) -> Option<&QuadrantInsight> {
        self.quadrants.iter().find(|q| q.category == category)
    }

    /// One `### <Category>` section per quadrant, blank line separated
    pub fn to_markdown(&self) -> String {
        self.quadrants
            .iter()
            .map(|q| format!("### {}\n{}", q.category.display_name(), q.narrative))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn select<'a>(
    category: PerformanceCategory,
    buckets: &CategoryBuckets<'a>,
    stats: &PopulationStats,
    config: &InsightConfig,
) -> Selection<'a> {
    let bucket = buckets.get(category);
    let n = &config.selection;
    match category {
        PerformanceCategory::Star => top_by_revenue(bucket, n.stars_top_n),
        PerformanceCategory::CashCow => top_by_revenue(bucket, n.cash_cows_top_n),
        PerformanceCategory::QuestionMark => pick_underperforming_fast(
            bucket,
            stats.median_issued,
            &config.unit_economics,
            n.question_marks_top_n,
        ),
        PerformanceCategory::Dog => pick_low_contribution(bucket, n.dogs_top_n),
    }
}

fn log_summary_divergence(upstream: &PerformanceSummary, buckets: &CategoryBuckets<'_>) {
    if upstream.total() != buckets.total() {
        log::warn!(
            "Population size differs: upstream {} vs local {}",
            upstream.total(),
            buckets.total()
        );
    }
    for category in PerformanceCategory::all() {
        let (theirs, ours) = (upstream.count(category), buckets.get(category).len());
        if theirs != ours {
            log::warn!(
                "{} count differs: upstream {} vs local {}",
                category.display_name(),
                theirs,
                ours
            );
        }
    }
}

/// Statistics, grouping, cross-check, selection and narrative in one pass.
///
/// The upstream summary is optional and only compared against, never trusted.
/// The same population and config always produce the same output.
pub fn analyze(
    products: &[ProductPerformanceRecord],
    upstream_summary: Option<&PerformanceSummary>,
    config: &InsightConfig,
) -> PerformanceAnalysis {
    let stats = PopulationStats::from_records(products);
    let buckets = group_by_category(products);
    let summary = buckets.summary(&stats);

    if let Some(upstream) = upstream_summary {
        log_summary_divergence(upstream, &buckets);
    }

    let mismatches = find_label_mismatches(products, &stats);
    if !mismatches.is_empty() {
        log::warn!(
            "{} product(s) carry a quadrant label that differs from local medians",
            mismatches.len()
        );
    }

    let quadrants = PerformanceCategory::all()
        .into_iter()
        .map(|category| {
            let selection = select(category, &buckets, &stats, config);
            let representatives = selection.to_representatives(&config.unit_economics);
            let narrative = compose_narrative(category, &representatives, selection.fallback);
            QuadrantInsight {
                category,
                product_count: buckets.get(category).len(),
                representatives,
                fallback: selection.fallback,
                narrative,
            }
        })
        .collect();

    PerformanceAnalysis {
        summary,
        stats,
        quadrants,
        label_mismatches: mismatches.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::performance::metrics::UnitStatus;
    use crate::shared::performance::test_support::{product, with_category, with_turnover};

    fn population() -> Vec<ProductPerformanceRecord> {
        vec![
            with_category(with_turnover(product("ST-1", 9000.0, 90, 50.0), 6.0), PerformanceCategory::Star),
            with_category(with_turnover(product("ST-2", 7000.0, 70, 99.0), 5.0), PerformanceCategory::Star),
            with_category(with_turnover(product("CC-1", 8000.0, 10, 100.0), 0.5), PerformanceCategory::CashCow),
            with_category(with_turnover(product("QM-1", 300.0, 60, 10.0), 4.0), PerformanceCategory::QuestionMark),
            with_category(with_turnover(product("QM-2", 200.0, 5, 1.0), 3.0), PerformanceCategory::QuestionMark),
            with_category(with_turnover(product("DG-1", 50.0, 1, 5.0), 0.1), PerformanceCategory::Dog),
            with_category(with_turnover(product("DG-2", 80.0, 3, 5.0), 0.2), PerformanceCategory::Dog),
        ]
    }

    fn skus(q: &QuadrantInsight) -> Vec<&str> {
        q.representatives.iter().map(|r| r.sku.as_str()).collect()
    }

    #[test]
    fn test_end_to_end() {
        let products = population();
        let analysis = analyze(&products, None, &InsightConfig::default());

        assert_eq!(analysis.summary.total(), products.len());
        assert_eq!(analysis.stats.median_issued, 10.0);
        assert_eq!(analysis.quadrants.len(), 4);

        let stars = analysis.quadrant(PerformanceCategory::Star).unwrap();
        assert_eq!(skus(stars), vec!["ST-1", "ST-2"]);
        // 7000 / 70 = 100 against cost 99: inside the thin band
        assert_eq!(stars.representatives[1].unit_status, UnitStatus::Thin);
        assert!(stars.narrative.contains("**tipis**"));

        let cows = analysis.quadrant(PerformanceCategory::CashCow).unwrap();
        assert_eq!(skus(cows), vec!["CC-1"]);

        // QM-1: 300 / 60 = 5 against cost 10, issued above the median
        let qms = analysis.quadrant(PerformanceCategory::QuestionMark).unwrap();
        assert!(!qms.fallback);
        assert_eq!(skus(qms), vec!["QM-1"]);

        let dogs = analysis.quadrant(PerformanceCategory::Dog).unwrap();
        assert_eq!(skus(dogs), vec!["DG-1"]);
    }

    #[test]
    fn test_empty_population() {
        let analysis = analyze(&[], None, &InsightConfig::default());
        assert_eq!(analysis.summary, PerformanceSummary::default());
        assert_eq!(analysis.quadrants.len(), 4);
        for q in &analysis.quadrants {
            assert!(q.representatives.is_empty());
            assert!(!q.narrative.is_empty());
        }
        assert_eq!(analysis.label_mismatches, 0);
    }

    #[test]
    fn test_upstream_labels_are_not_overwritten() {
        // high on both axes but labelled Dog upstream
        let products = vec![
            with_category(with_turnover(product("odd", 9000.0, 90, 1.0), 9.0), PerformanceCategory::Dog),
            with_category(with_turnover(product("low", 10.0, 1, 1.0), 0.1), PerformanceCategory::Dog),
        ];
        let analysis = analyze(&products, None, &InsightConfig::default());

        assert_eq!(analysis.label_mismatches, 1);
        assert_eq!(analysis.summary.dogs, 2);
        assert_eq!(analysis.summary.stars, 0);
        assert!(analysis.quadrant(PerformanceCategory::Star).unwrap().representatives.is_empty());
    }

    #[test]
    fn test_wrong_upstream_summary_is_tolerated() {
        let products = population();
        let bogus = PerformanceSummary {
            stars: 40,
            ..PerformanceSummary::default()
        };
        let with_bogus = analyze(&products, Some(&bogus), &InsightConfig::default());
        let without = analyze(&products, None, &InsightConfig::default());
        assert_eq!(with_bogus, without);
    }

    #[test]
    fn test_local_summary_covers_whole_population() {
        let products = population();
        let buckets = group_by_category(&products);
        assert_eq!(buckets.total(), products.len());

        let analysis = analyze(&products, None, &InsightConfig::default());
        assert_eq!(analysis.summary.total(), buckets.total());
        let listed: usize = analysis.quadrants.iter().map(|q| q.product_count).sum();
        assert_eq!(listed, buckets.total());
    }

    #[test]
    fn test_idempotent() {
        let products = population();
        let config = InsightConfig::default();
        let first = analyze(&products, None, &config);
        let second = analyze(&products, None, &config);
        assert_eq!(first, second);
        assert_eq!(first.to_markdown(), second.to_markdown());
    }

    #[test]
    fn test_markdown_section_order() {
        let markdown = analyze(&population(), None, &InsightConfig::default()).to_markdown();
        let positions: Vec<usize> = ["### Stars", "### Cash Cows", "### Question Marks", "### Dogs"]
            .iter()
            .map(|h| markdown.find(h).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_selection_counts_follow_config() {
        let mut config = InsightConfig::default();
        config.selection.stars_top_n = 1;
        let analysis = analyze(&population(), None, &config);
        assert_eq!(skus(analysis.quadrant(PerformanceCategory::Star).unwrap()), vec!["ST-1"]);
    }
}
