//! Browser Dialogs
//!
//! Blocking `window.confirm` / `window.alert` and object URLs for previews.

use wasm_bindgen::JsCast;

/// Ask the user; false when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("[Dialog] alert failed: {}", message);
        }
    }
}

/// Local preview URL for a picked file
pub fn object_url(file: &web_sys::File) -> Option<String> {
    let blob: &web_sys::Blob = file.unchecked_ref();
    web_sys::Url::create_object_url_with_blob(blob).ok()
}

pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
