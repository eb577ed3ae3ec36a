//! Clipboard access. Failures are reported as `false`, never raised.

use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard.
pub async fn copy_text(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let promise = window.navigator().clipboard().write_text(text);
    match JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Clipboard write failed: {:?}", e);
            false
        }
    }
}
