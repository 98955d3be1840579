//! Runtime Configuration
//!
//! Backend location and fixed protocol constants.

/// Compiled-in backend base URL; empty means same origin
pub const DEFAULT_BACKEND_URL: &str = match option_env!("MINIAPP_BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// localStorage key that overrides [`DEFAULT_BACKEND_URL`]
pub const BACKEND_URL_STORAGE_KEY: &str = "miniapp_backend_url";

/// Header carrying the raw Telegram init data
pub const INIT_DATA_HEADER: &str = "microfinance_backend-Telegram-Init-Data";

pub const STATUS_PATH: &str = "/miniapp/api/status/";
pub const REGISTER_PATH: &str = "/miniapp/api/register/";

/// How long a success/error message stays visible
pub const MESSAGE_TIMEOUT_MS: u32 = 5_000;

/// Get the backend base URL from local storage or use the compiled default
pub fn backend_base_url() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(BACKEND_URL_STORAGE_KEY).ok().flatten());

    match stored {
        Some(url) if !url.trim().is_empty() => normalize_base_url(&url),
        _ => normalize_base_url(DEFAULT_BACKEND_URL),
    }
}

/// Trim whitespace and trailing slashes
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Join a normalized base URL and an absolute API path
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_overrides_default() {
        let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
        storage.set_item(BACKEND_URL_STORAGE_KEY, "https://tunnel.example.app/").unwrap();
        assert_eq!(backend_base_url(), "https://tunnel.example.app");

        storage.remove_item(BACKEND_URL_STORAGE_KEY).unwrap();
        assert_eq!(backend_base_url(), normalize_base_url(DEFAULT_BACKEND_URL));
    }
}
