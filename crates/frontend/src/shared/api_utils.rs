//! API utilities for talking to the inventory analytics service
//!
//! The service runs on its own origin; the browser only knows where to find
//! it through a build-time override or the current window location.

/// Port of the analytics API when no explicit URL is configured
const DEFAULT_API_PORT: u16 = 3001;

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `INVENTORY_API_URL` at build time (e.g. "https://inventory.example.com")
/// 2. Current window protocol + hostname with port 3001
/// 3. Empty string when no window is available (relative URLs)
pub fn api_base() -> String {
    if let Some(url) = option_env!("INVENTORY_API_URL") {
        return url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/performance/products");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append URL-encoded query parameters, skipping `None` values
pub fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value.map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_skips_missing() {
        assert_eq!(
            with_query("/api/performance/products", &[("warehouseId", None), ("category", None)]),
            "/api/performance/products"
        );
    }

    #[test]
    fn test_with_query_encodes_values() {
        assert_eq!(
            with_query(
                "/api/performance/insights",
                &[("warehouseId", Some("WH-01")), ("category", Some("Raw Material"))]
            ),
            "/api/performance/insights?warehouseId=WH-01&category=Raw%20Material"
        );
    }
}
