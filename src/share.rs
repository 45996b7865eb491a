//! Best-effort native share integration
//!
//! Isolated from search state entirely: a missing platform capability is a
//! silent no-op, never an error the visitor sees.

/// Title passed to the platform share sheet.
pub const SHARE_TITLE: &str = "287(g) Agency Lookup";

/// Offer the current page URL to the platform's native share capability.
#[cfg(feature = "web")]
pub fn share_page(title: &str) {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();

    // navigator.share does not exist in every browser.
    let has_share =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false);
    if !has_share {
        tracing::debug!("navigator.share unavailable, ignoring share request");
        return;
    }

    let url = window.location().href().unwrap_or_default();
    let data = web_sys::ShareData::new();
    data.set_title(title);
    data.set_url(&url);

    // Fire and forget; the returned promise is intentionally dropped.
    let _ = navigator.share_with_data(&data);
}

#[cfg(not(feature = "web"))]
pub fn share_page(_title: &str) {}
