//! Opportunistic image warm-up.
//!
//! Views call this for every image they reference so the browser can start
//! fetching before the `<img>` elements hit the DOM. Submit-and-discard:
//! the element handle is dropped immediately and load failures go nowhere.

pub fn prefetch_image(src: &str) {
    if let Ok(img) = web_sys::HtmlImageElement::new() {
        img.set_src(src);
    }
}
