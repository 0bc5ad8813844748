//! PageFrame: standard root wrapper for every dashboard page.
//!
//! Sets `id` (`"{entity}--{category}"`, e.g. `"d410_product_performance--dashboard"`)
//! and `data-page-category` on the root element so a page can be located
//! from the DOM inspector.

use leptos::prelude::*;

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "malformed page id: {page_id}");

    let full_class = if class.is_empty() {
        "page page--dashboard".to_string()
    } else {
        format!("page page--dashboard {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=PAGE_CAT_DASHBOARD
        >
            {children()}
        </div>
    }
}
