use super::insights_panel::InsightsPanel;
use super::quadrant_panel::QuadrantPanel;
use super::summary_cards::SummaryCards;
use crate::dashboards::d410_product_performance::api;
use crate::shared::config::load_insight_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::polling::use_interval_refresh;
use contracts::dashboards::d410_product_performance::{
    ProductPerformanceInsightResponse, ProductPerformanceRequest, ProductPerformanceResponse,
};
use contracts::shared::performance::analyze;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ProductPerformanceDashboard() -> impl IntoView {
    let config = load_insight_config();
    let interval_secs = config.polling.interval_secs;

    let filter = RwSignal::new(ProductPerformanceRequest::default());
    let performance = RwSignal::new(None::<ProductPerformanceResponse>);
    let insights = RwSignal::new(None::<ProductPerformanceInsightResponse>);
    let loading_products = RwSignal::new(false);
    let loading_insights = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);
    let insights_error = RwSignal::new(None::<String>);

    // Failed refreshes keep the last good payload on screen
    let load_products = move || {
        if loading_products.get_untracked() {
            return;
        }
        loading_products.set(true);
        let request = filter.get_untracked();
        spawn_local(async move {
            match api::get_product_performance(&request).await {
                Ok(data) => {
                    log::debug!("Loaded {} products", data.products.len());
                    performance.set(Some(data));
                    error_msg.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load product performance: {}", e);
                    error_msg.set(Some(e));
                }
            }
            loading_products.set(false);
        });
    };

    let load_insights = move || {
        if loading_insights.get_untracked() {
            return;
        }
        loading_insights.set(true);
        let request = filter.get_untracked();
        spawn_local(async move {
            match api::get_product_performance_insights(&request).await {
                Ok(data) => {
                    insights.set(Some(data));
                    insights_error.set(None);
                }
                Err(e) => {
                    log::warn!("Failed to load AI insights: {}", e);
                    insights_error.set(Some(e));
                }
            }
            loading_insights.set(false);
        });
    };

    let load_all = move || {
        load_products();
        load_insights();
    };

    load_all();
    use_interval_refresh(interval_secs, load_all);

    let analysis = Memo::new(move |_| {
        performance
            .get()
            .map(|data| analyze(&data.products, Some(&data.summary), &config))
    });

    let summary = Signal::derive(move || performance.get().map(|data| data.summary));
    let local_markdown = Signal::derive(move || analysis.get().map(|a| a.to_markdown()));
    let on_refresh_insights = Callback::new(move |_| load_insights());

    view! {
        <PageFrame page_id="d410_product_performance--dashboard">
            <div class="page__header">
                <div>
                    <h2 class="page__title">"Product Performance Analysis"</h2>
                    <div class="page__subtitle">"Analisis 30 hari terakhir"</div>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_all()
                    disabled=loading_products
                >
                    {move || if loading_products.get() { "Memuat..." } else { "Refresh" }}
                </Button>
            </div>

            {move || error_msg.get().map(|msg| view! {
                <div class="alert alert--error">
                    <span>{msg}</span>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| load_products()
                    >
                        "Coba Lagi"
                    </Button>
                </div>
            })}

            <SummaryCards summary=summary loading=loading_products />

            <InsightsPanel
                insights=insights
                local_markdown=local_markdown
                loading=loading_insights
                error=insights_error
                on_refresh=on_refresh_insights
            />

            <div class="quadrant-grid">
                {move || {
                    analysis
                        .get()
                        .map(|a| {
                            a.quadrants
                                .into_iter()
                                .map(|insight| view! { <QuadrantPanel insight=insight /> })
                                .collect_view()
                        })
                }}
            </div>
        </PageFrame>
    }
}
