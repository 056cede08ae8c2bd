//! One-shot fetch of the inspection data file.

use inspections_rs::{InspectionRecord, LoadError, parse_records};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Describe a rejected promise or failed cast.
fn js_error(value: JsValue) -> LoadError {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{value:?}"),
    };
    LoadError::Network(message)
}

/// Fetch and parse the data file at `url`.
///
/// Network failures, non-success statuses and malformed bodies all come back
/// as a `LoadError`; nothing is retried.
pub async fn fetch_records(url: &str) -> Result<Vec<InspectionRecord>, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::Network("no window available".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(LoadError::Status {
            status: resp.status(),
            status_text: resp.status_text(),
        });
    }

    let body = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = body
        .as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".to_string()))?;

    parse_records(&text)
}
