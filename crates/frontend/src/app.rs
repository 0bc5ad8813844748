use crate::dashboards::ProductPerformanceDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-main">
            <ProductPerformanceDashboard />
        </main>
    }
}
