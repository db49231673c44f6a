//! Navigation primitives. Route parsing lives in `contracts::routing`; this
//! module owns the write side: turning user intent into a hash fragment.
//! The `hashchange` event the writes trigger is what drives re-rendering.

pub use contracts::routing::Route;

fn set_fragment(fragment: &str) {
    if let Some(window) = web_sys::window() {
        _ = window.location().set_hash(fragment);
    }
}

pub fn go_to_root() {
    set_fragment("");
}

pub fn go_to_category(name: &str) {
    set_fragment(&Route::category_fragment(name));
}

pub fn go_to_item(category: &str, piece: &str) {
    set_fragment(&Route::item_fragment(category, piece));
}

/// Current hash fragment, empty outside a browser context.
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}
