//! Telegram WebApp Bindings
//!
//! Thin wrapper over the `window.Telegram.WebApp` object injected by
//! telegram-web-app.js.

use percent_encoding::percent_decode_str;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    type RawWebApp;

    #[wasm_bindgen(method, getter, js_name = initData)]
    fn init_data(this: &RawWebApp) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = initDataUnsafe)]
    fn init_data_unsafe(this: &RawWebApp) -> JsValue;

    #[wasm_bindgen(method)]
    fn ready(this: &RawWebApp);

    #[wasm_bindgen(method)]
    fn expand(this: &RawWebApp);
}

/// Telegram user as described by init data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

/// Handle to the Telegram WebApp SDK object
#[derive(Debug, Clone)]
pub struct WebApp {
    raw: RawWebApp,
}

/// Get the WebApp object, or `None` when not running inside Telegram
///
/// telegram-web-app.js defines `WebApp` in any browser; only a launch from
/// Telegram supplies init data.
pub fn web_app() -> Option<WebApp> {
    let window = web_sys::window()?;
    let telegram = get_defined(&window, "Telegram")?;
    let raw: RawWebApp = get_defined(&telegram, "WebApp")?.unchecked_into();
    if raw.init_data().unwrap_or_default().is_empty() {
        return None;
    }
    Some(WebApp { raw })
}

fn get_defined(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

impl WebApp {
    /// Raw signed init data query string (empty when absent)
    pub fn init_data(&self) -> String {
        self.raw.init_data().unwrap_or_default()
    }

    /// Current user from `initDataUnsafe.user`, falling back to the raw init data
    pub fn user(&self) -> Option<TelegramUser> {
        let from_unsafe = get_defined(&self.raw.init_data_unsafe(), "user")
            .and_then(|user| match serde_wasm_bindgen::from_value::<TelegramUser>(user) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("[TELEGRAM] Unreadable initDataUnsafe.user: {}", e);
                    None
                }
            });
        from_unsafe.or_else(|| parse_init_data_user(&self.init_data()))
    }

    /// Tell Telegram the app is ready and take the full height
    pub fn signal_ready(&self) {
        self.raw.ready();
        self.raw.expand();
    }
}

/// Extract the `user` field from a raw init data query string
pub fn parse_init_data_user(init_data: &str) -> Option<TelegramUser> {
    let encoded = init_data
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "user")
        .map(|(_, value)| value)?;

    // Query strings encode spaces as '+'
    let plus_decoded = encoded.replace('+', " ");
    let json = percent_decode_str(&plus_decoded).decode_utf8().ok()?;
    serde_json::from_str(&json).ok()
}
