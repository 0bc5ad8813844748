use crate::shared::date_utils::format_local_datetime_id;
use crate::shared::emphasis::EmphasisText;
use contracts::dashboards::d410_product_performance::ProductPerformanceInsightResponse;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
enum InsightBlock {
    Heading(String),
    Paragraph(String),
}

/// Split insight markdown into `###` headings and paragraphs; blank lines are dropped
fn insight_blocks(text: &str) -> Vec<InsightBlock> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with('#') {
                InsightBlock::Heading(line.trim_start_matches('#').trim().to_string())
            } else {
                InsightBlock::Paragraph(line.to_string())
            }
        })
        .collect()
}

/// Failure notice; mentions that older text is still shown when there is some
fn failure_notice(error: &str, showing_previous: bool) -> String {
    if showing_previous {
        format!("Failed to generate insights: {}. Menampilkan insight terakhir.", error)
    } else {
        format!("Failed to generate insights: {}", error)
    }
}

#[component]
fn InsightText(text: String) -> impl IntoView {
    insight_blocks(&text)
        .into_iter()
        .map(|block| match block {
            InsightBlock::Heading(title) => {
                view! { <h4 class="insights-panel__heading">{title}</h4> }.into_any()
            }
            InsightBlock::Paragraph(line) => view! {
                <p class="insights-panel__paragraph"><EmphasisText text=line /></p>
            }
            .into_any(),
        })
        .collect_view()
}

/// Upstream AI insight text, with the locally composed narratives as a
/// stand-in while it is unavailable.
#[component]
pub fn InsightsPanel(
    #[prop(into)] insights: Signal<Option<ProductPerformanceInsightResponse>>,
    /// Markdown composed from the locally analysed population
    #[prop(into)]
    local_markdown: Signal<Option<String>>,
    #[prop(into)] loading: Signal<bool>,
    /// Last insight request failure, cleared on the next success
    #[prop(into)]
    error: Signal<Option<String>>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let error_block = move || {
        error.get().map(|e| {
            let notice = failure_notice(&e, insights.with(Option::is_some));
            view! {
                <div class="alert alert--error insights-panel__error">
                    <span>{notice}</span>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_refresh.run(())
                    >
                        "Coba Lagi"
                    </Button>
                </div>
            }
        })
    };

    let generated_at = move || {
        insights.get().map(|i| {
            let stamp = i
                .generated_at_utc()
                .map(|dt| format_local_datetime_id(&dt))
                .unwrap_or(i.generated_at);
            view! { <span class="insights-panel__timestamp">"Generated at: " {stamp}</span> }
        })
    };

    let body = move || match insights.get() {
        Some(response) => view! { <InsightText text=response.insights /> }.into_any(),
        None if loading.get() => view! {
            <div class="insights-panel__loading">"Generating AI insights..."</div>
        }
        .into_any(),
        None => match local_markdown.get() {
            Some(markdown) => view! {
                <div class="insights-panel__local">
                    <div class="insights-panel__note">
                        "Insight AI belum tersedia, ringkasan disusun dari data produk."
                    </div>
                    <InsightText text=markdown />
                </div>
            }
            .into_any(),
            None => view! {
                <div class="insights-panel__empty">"Belum ada insight."</div>
            }
            .into_any(),
        },
    };

    view! {
        <section class="insights-panel">
            <div class="insights-panel__header">
                <h3 class="insights-panel__title">"AI Performance Insights"</h3>
                {generated_at}
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=loading
                >
                    "Refresh"
                </Button>
            </div>
            {error_block}
            <div class="insights-panel__body">{body}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_blocks() {
        let text = "### Stars\n**Stars** dipimpin oleh A (A1).\n\n### Dogs\nTidak ada produk **Dog**.";
        assert_eq!(
            insight_blocks(text),
            vec![
                InsightBlock::Heading("Stars".to_string()),
                InsightBlock::Paragraph("**Stars** dipimpin oleh A (A1).".to_string()),
                InsightBlock::Heading("Dogs".to_string()),
                InsightBlock::Paragraph("Tidak ada produk **Dog**.".to_string()),
            ]
        );
    }

    #[test]
    fn test_failure_notice_carries_error() {
        let first_load = failure_notice("HTTP error: 502", false);
        assert_eq!(first_load, "Failed to generate insights: HTTP error: 502");

        let refresh = failure_notice("HTTP error: 502", true);
        assert!(refresh.starts_with("Failed to generate insights: HTTP error: 502"));
        assert!(refresh.contains("insight terakhir"));
    }

    #[test]
    fn test_insight_blocks_plain_text() {
        assert_eq!(
            insight_blocks("  satu baris  \n\n"),
            vec![InsightBlock::Paragraph("satu baris".to_string())]
        );
        assert!(insight_blocks("").is_empty());
    }
}
