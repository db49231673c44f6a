//! Resource configuration for the catalog dataset.

use wasm_bindgen::JsValue;

const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

/// Locator of the catalog dataset.
///
/// Defaults to a path relative to the hosting page; a host can override it
/// by setting `window.CATALOG_URL` before the app boots.
///
/// # Example
/// ```html
/// <script>window.CATALOG_URL = "/assets/portfolio.json";</script>
/// ```
pub fn catalog_url() -> String {
    let Some(window) = web_sys::window() else {
        return DEFAULT_CATALOG_PATH.to_string();
    };
    js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("CATALOG_URL"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
}
