//! Endpoint Configuration
//!
//! The API base URL is resolved per call site: a localStorage override if the
//! user saved one, otherwise the compiled-in default. Pages treat the value
//! as read-only.

/// Default API base URL (a local placeholder, which enables demo mode).
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const STORAGE_KEY: &str = "brainhealth_api_url";

/// Get the API base URL from local storage or use default.
pub fn api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage.
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, url);
        }
    }
}

/// True when the configured endpoint is a local placeholder rather than a
/// deployed backend. Pages with a fallback switch to simulated results up
/// front instead of waiting for the connection to fail.
pub fn is_demo_endpoint(base: &str) -> bool {
    base.contains("localhost") || base.contains("127.0.0.1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_is_a_demo_endpoint() {
        assert!(is_demo_endpoint(DEFAULT_API_BASE));
    }

    #[test]
    fn deployed_base_is_not_a_demo_endpoint() {
        assert!(!is_demo_endpoint("https://api.brainhealth-ai.com"));
        assert!(is_demo_endpoint("http://127.0.0.1:8000"));
    }
}
