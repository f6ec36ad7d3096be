//! Frontend configuration module
//!
//! Resolves where the browser client sends its API requests.

use shared::client::DEFAULT_BASE_URL;

/// Frontend configuration for the API location
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Root URL of the family-tree API
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        let origin = web_sys::window().and_then(|window| window.location().origin().ok());
        Self {
            api_base_url: resolve_base_url(option_env!("FAMILYTREE_API_BASE_URL"), origin),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }
}

/// A build-time override wins, then the page origin, then the local default.
fn resolve_base_url(build_time: Option<&str>, origin: Option<String>) -> String {
    build_time
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or(origin.filter(|value| value.starts_with("http")))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
