//! Thin wrappers over browser globals (location, alerts, downloads).
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these instead of touching `web_sys` directly. Outside the
//! browser every function is a no-op or returns an empty value, so the same
//! code renders on the server and runs under unit tests.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// Full-page navigation to `url`.
pub fn navigate_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("navigation to {url} skipped outside the browser");
    }
}

/// Blocking alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::info!("alert: {message}");
    }
}

/// Current `location.hash`, including the leading `#`.
pub fn current_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Offer `content` as a `text/plain` file download named `filename`.
pub fn download_text_file(filename: &str, content: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = trigger_download(filename, content) {
            log::error!("error downloading {filename}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("download of {filename} ({} bytes) skipped outside the browser", content.len());
    }
}

#[cfg(feature = "hydrate")]
fn trigger_download(filename: &str, content: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)
}
