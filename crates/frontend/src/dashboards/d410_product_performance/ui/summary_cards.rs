use contracts::dashboards::d410_product_performance::PerformanceSummary;
use contracts::enums::PerformanceCategory;
use leptos::prelude::*;

/// id-ID grouping: `1234567` -> `1.234.567`
fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Rupiah amount without decimals, e.g. `Rp 1.250.000`
pub(super) fn format_rupiah(value: f64) -> String {
    format!("Rp {}", format_thousands(value.round() as i64))
}

/// Decimal with a comma separator, e.g. `2,35`
pub(super) fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals).replace('.', ",")
}

pub(super) fn category_modifier(category: PerformanceCategory) -> &'static str {
    match category {
        PerformanceCategory::Star => "star",
        PerformanceCategory::CashCow => "cash-cow",
        PerformanceCategory::QuestionMark => "question-mark",
        PerformanceCategory::Dog => "dog",
    }
}

#[component]
pub fn SummaryCards(
    /// Upstream summary; `None` until the first load completes
    #[prop(into)]
    summary: Signal<Option<PerformanceSummary>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let cards = PerformanceCategory::all()
        .into_iter()
        .map(|category| {
            let class = move || {
                let base = format!("stat-card stat-card--{}", category_modifier(category));
                if loading.get() {
                    format!("{base} stat-card--loading")
                } else {
                    base
                }
            };
            let value = move || match summary.get() {
                Some(s) => format_thousands(s.count(category) as i64),
                None => "-".to_string(),
            };

            view! {
                <div class=class>
                    <div class="stat-card__header">
                        <span class="stat-card__label">{category.display_name()}</span>
                    </div>
                    <div class="stat-card__value">{value}</div>
                    <div class="stat-card__subtitle">{category.description()}</div>
                </div>
            }
        })
        .collect_view();

    let medians = move || {
        summary.get().map(|s| {
            view! {
                <div class="performance-summary__medians">
                    <span>"Median turnover: " {format_decimal(s.median_turnover, 2)}</span>
                    <span>"Median revenue: " {format_rupiah(s.median_revenue)}</span>
                </div>
            }
        })
    };

    view! {
        <div class="performance-summary">
            <div class="performance-summary__grid">{cards}</div>
            {medians}
        </div>
    }
}
