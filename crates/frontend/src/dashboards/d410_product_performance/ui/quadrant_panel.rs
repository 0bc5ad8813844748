use super::summary_cards::{category_modifier, format_rupiah};
use crate::shared::emphasis::EmphasisText;
use contracts::shared::performance::{QuadrantInsight, RepresentativeProduct, UnitStatus};
use leptos::prelude::*;

fn status_label(status: UnitStatus) -> &'static str {
    match status {
        UnitStatus::BelowCost => "Di bawah biaya",
        UnitStatus::Thin => "Margin tipis",
        UnitStatus::Healthy => "Sehat",
        UnitStatus::NoSalesData => "Tanpa data",
    }
}

fn status_badge_class(status: UnitStatus) -> String {
    format!("badge badge--{}", status.code().replace('_', "-"))
}

#[component]
fn RepresentativeRow(product: RepresentativeProduct) -> impl IntoView {
    let status = product.unit_status;
    view! {
        <li class="quadrant-panel__item">
            <span class="quadrant-panel__product">{product.label()}</span>
            <span class="quadrant-panel__metric">
                {format!("{} keluar", product.total_issued_30_days)}
            </span>
            <span class="quadrant-panel__metric">{format_rupiah(product.revenue_potential)}</span>
            <span class=status_badge_class(status)>{status_label(status)}</span>
        </li>
    }
}

#[component]
pub fn QuadrantPanel(insight: QuadrantInsight) -> impl IntoView {
    let QuadrantInsight {
        category,
        product_count,
        representatives,
        fallback,
        narrative,
    } = insight;

    let rows = (!representatives.is_empty()).then(|| {
        view! {
            <ul class="quadrant-panel__list">
                {representatives
                    .into_iter()
                    .map(|product| view! { <RepresentativeRow product=product /> })
                    .collect_view()}
            </ul>
        }
    });

    view! {
        <section class=format!("quadrant-panel quadrant-panel--{}", category_modifier(category))>
            <header class="quadrant-panel__header">
                <h3 class="quadrant-panel__title">{category.display_name()}</h3>
                <span class="quadrant-panel__count">{format!("{} produk", product_count)}</span>
            </header>
            <p class="quadrant-panel__narrative">
                <EmphasisText text=narrative />
            </p>
            {rows}
            {fallback.then(|| view! {
                <div class="quadrant-panel__hint">
                    "Kriteria utama tidak terpenuhi, contoh diambil dari urutan cadangan."
                </div>
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_classes() {
        assert_eq!(status_badge_class(UnitStatus::BelowCost), "badge badge--below-cost");
        assert_eq!(status_badge_class(UnitStatus::Healthy), "badge badge--healthy");
        assert_eq!(
            status_badge_class(UnitStatus::NoSalesData),
            "badge badge--no-sales-data"
        );
    }

    #[test]
    fn test_status_labels_are_distinct() {
        let labels = [
            status_label(UnitStatus::BelowCost),
            status_label(UnitStatus::Thin),
            status_label(UnitStatus::Healthy),
            status_label(UnitStatus::NoSalesData),
        ];
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
