use crate::shared::api_utils::{api_url, with_query};
use contracts::dashboards::d410_product_performance::{
    ProductPerformanceInsightResponse, ProductPerformanceRequest, ProductPerformanceResponse,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api/performance";

fn endpoint(path: &str, filter: &ProductPerformanceRequest) -> String {
    with_query(
        &format!("{}/{}", API_BASE, path),
        &[
            ("warehouseId", filter.warehouse_id.as_deref()),
            ("category", filter.category.as_deref()),
        ],
    )
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Products with their upstream quadrant label and summary (30-day window)
pub async fn get_product_performance(
    filter: &ProductPerformanceRequest,
) -> Result<ProductPerformanceResponse, String> {
    get_json(&endpoint("products", filter)).await
}

/// AI-generated insight text; may take long upstream
pub async fn get_product_performance_insights(
    filter: &ProductPerformanceRequest,
) -> Result<ProductPerformanceInsightResponse, String> {
    get_json(&endpoint("insights", filter)).await
}
