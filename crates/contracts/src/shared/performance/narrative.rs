//! Fixed-template narrative for each quadrant (Indonesian, markdown emphasis).
//!
//! Sentences never contain raw numbers; they only name the representative
//! products and vary wording by their unit status.

use super::metrics::UnitStatus;
use super::selection::RepresentativeProduct;
use crate::enums::PerformanceCategory;

/// Placeholder shown when a quadrant has no representative
pub const EMPTY_EXAMPLES: &str = "-";

/// `name (sku), name (sku)` or `-` when empty
pub fn format_examples(representatives: &[RepresentativeProduct]) -> String {
    if representatives.is_empty() {
        return EMPTY_EXAMPLES.to_string();
    }
    representatives
        .iter()
        .map(RepresentativeProduct::label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn any_status(representatives: &[RepresentativeProduct], status: UnitStatus) -> bool {
    representatives.iter().any(|r| r.unit_status == status)
}

fn empty_quadrant_sentence(category: PerformanceCategory) -> &'static str {
    match category {
        PerformanceCategory::Star => {
            "Belum ada produk **Star** pada periode ini; belum ada produk yang unggul di perputaran dan pendapatan sekaligus."
        }
        PerformanceCategory::CashCow => {
            "Belum ada produk **Cash Cow** pada periode ini; pendapatan besar belum bertumpu pada produk yang bergerak lambat."
        }
        PerformanceCategory::QuestionMark => {
            "Belum ada produk **Question Mark** pada periode ini."
        }
        PerformanceCategory::Dog => {
            "Tidak ada produk **Dog** pada periode ini; seluruh produk berkontribusi di atas kuadran terendah."
        }
    }
}

fn star_margin_clause(representatives: &[RepresentativeProduct]) -> &'static str {
    if any_status(representatives, UnitStatus::BelowCost) {
        "Perhatikan: sebagian nilai per unit berada **di bawah biaya**, tinjau ulang harga sebelum menambah stok."
    } else if any_status(representatives, UnitStatus::Thin) {
        "Margin per unit masih **tipis**, jaga harga agar pertumbuhan tetap menguntungkan."
    } else if any_status(representatives, UnitStatus::NoSalesData) {
        "Sebagian produk **belum memiliki data pengeluaran** sebulan terakhir, pastikan pencatatan sudah lengkap."
    } else {
        "Margin per unit **tetap terjaga**, pertahankan ketersediaan stok."
    }
}

fn cash_cow_clause(representatives: &[RepresentativeProduct]) -> &'static str {
    if representatives.iter().any(|r| !r.unit_status.is_healthy()) {
        "Beberapa di antaranya memiliki **margin yang perlu ditinjau** agar arus kas tidak tergerus."
    } else {
        "Arus kas dari produk ini **stabil**, hindari penumpukan stok berlebih."
    }
}

/// Narrative sentence for one quadrant.
///
/// `fallback` tells whether the representatives came from the selector's
/// fallback path; Question Marks and Dogs word that case differently.
pub fn compose_narrative(
    category: PerformanceCategory,
    representatives: &[RepresentativeProduct],
    fallback: bool,
) -> String {
    if representatives.is_empty() {
        return empty_quadrant_sentence(category).to_string();
    }

    let examples = format_examples(representatives);
    match category {
        PerformanceCategory::Star => format!(
            "**Stars** dipimpin oleh {}, dengan perputaran stok dan potensi pendapatan di atas median. {}",
            examples,
            star_margin_clause(representatives)
        ),
        PerformanceCategory::CashCow => format!(
            "**Cash Cows** seperti {} menyumbang pendapatan besar meski perputarannya lambat. {}",
            examples,
            cash_cow_clause(representatives)
        ),
        PerformanceCategory::QuestionMark if fallback => format!(
            "**Question Marks** seperti {} bergerak cepat namun pendapatannya masih rendah; pantau apakah permintaan dapat dikonversi menjadi pendapatan.",
            examples
        ),
        PerformanceCategory::QuestionMark => format!(
            "**Question Marks** seperti {} keluar cepat namun **margin per unitnya tipis atau di bawah biaya**; evaluasi harga jual atau biaya pengadaan.",
            examples
        ),
        PerformanceCategory::Dog if fallback => format!(
            "**Dogs** dengan pendapatan terendah antara lain {}; tinjau kembali kebutuhan stoknya.",
            examples
        ),
        PerformanceCategory::Dog => format!(
            "**Dogs** seperti {} rendah baik pada pendapatan maupun jumlah keluar; pertimbangkan pengurangan stok atau penghentian produk.",
            examples
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rep(name: &str, sku: &str, status: UnitStatus) -> RepresentativeProduct {
        RepresentativeProduct {
            product_id: format!("id-{sku}"),
            sku: sku.to_string(),
            product_name: name.to_string(),
            revenue_potential: 100.0,
            total_issued_30_days: 10,
            unit_value: 10.0,
            unit_status: status,
        }
    }

    #[test]
    fn test_format_examples() {
        assert_eq!(format_examples(&[]), "-");
        let reps = vec![
            rep("Gula", "RM-1", UnitStatus::Healthy),
            rep("Kopi", "RM-2", UnitStatus::Thin),
        ];
        assert_eq!(format_examples(&reps), "Gula (RM-1), Kopi (RM-2)");
    }

    #[test]
    fn test_empty_quadrants_have_fallback_sentence() {
        for category in PerformanceCategory::all() {
            let text = compose_narrative(category, &[], false);
            assert!(!text.is_empty());
            assert!(text.contains(category.label()));
            assert_eq!(text, compose_narrative(category, &[], true));
        }
    }

    #[test]
    fn test_star_margin_clause_priority() {
        let healthy = vec![rep("A", "A1", UnitStatus::Healthy)];
        assert!(compose_narrative(PerformanceCategory::Star, &healthy, false).contains("tetap terjaga"));

        let thin = vec![rep("A", "A1", UnitStatus::Healthy), rep("B", "B1", UnitStatus::Thin)];
        assert!(compose_narrative(PerformanceCategory::Star, &thin, false).contains("**tipis**"));

        let below = vec![
            rep("A", "A1", UnitStatus::Thin),
            rep("B", "B1", UnitStatus::BelowCost),
        ];
        let text = compose_narrative(PerformanceCategory::Star, &below, false);
        assert!(text.contains("di bawah biaya"));
        assert!(!text.contains("**tipis**"));
    }

    #[test]
    fn test_star_narrative_names_products() {
        let reps = vec![rep("Gula Pasir", "RM-001", UnitStatus::Healthy)];
        let text = compose_narrative(PerformanceCategory::Star, &reps, false);
        assert!(text.starts_with("**Stars** dipimpin oleh Gula Pasir (RM-001)"));
    }

    #[test]
    fn test_cash_cow_clause() {
        let stable = vec![rep("A", "A1", UnitStatus::Healthy)];
        assert!(compose_narrative(PerformanceCategory::CashCow, &stable, false).contains("**stabil**"));

        let review = vec![rep("A", "A1", UnitStatus::NoSalesData)];
        assert!(compose_narrative(PerformanceCategory::CashCow, &review, false)
            .contains("margin yang perlu ditinjau"));
    }

    #[test]
    fn test_fallback_wording_differs() {
        let reps = vec![rep("A", "A1", UnitStatus::Healthy)];
        for category in [PerformanceCategory::QuestionMark, PerformanceCategory::Dog] {
            let primary = compose_narrative(category, &reps, false);
            let fallback = compose_narrative(category, &reps, true);
            assert_ne!(primary, fallback);
            assert!(fallback.contains("A (A1)"));
        }
    }

    #[test]
    fn test_narrative_has_no_digits_besides_names() {
        let reps = vec![rep("Produk", "SKU", UnitStatus::Healthy)];
        for category in PerformanceCategory::all() {
            for fallback in [false, true] {
                let text = compose_narrative(category, &reps, fallback);
                let digits: Vec<char> = text.chars().filter(|c| c.is_ascii_digit()).collect();
                assert!(digits.is_empty(), "unexpected digits in {text}");
            }
        }
    }
}
