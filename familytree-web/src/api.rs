use once_cell::unsync::OnceCell;
use shared::client::ApiClient;
use wasm_bindgen::JsValue;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = const { OnceCell::new() };
}

/// API client for the current page, built on first use.
pub fn shared_client() -> ApiClient {
    SHARED_CLIENT.with(|cell| {
        cell.get_or_init(|| build_client(&FrontendConfig::new().api_base_url))
            .clone()
    })
}

fn build_client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url).unwrap_or_else(|err| {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "Falling back to the default API URL: {err}"
        )));
        ApiClient::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_base_url_is_kept() {
        assert_eq!(
            build_client("http://tree.example/").base_url(),
            "http://tree.example"
        );
    }
}
