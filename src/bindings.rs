//! `wasm-bindgen` exports for the web-view editor.
//!
//! Names and argument shapes mirror what the editor view already calls:
//! requests and detection results cross the boundary as plain JS objects.
//! Offsets arrive as the textarea's UTF-16 code units and are converted to
//! characters before anything else sees them.

use wasm_bindgen::prelude::*;

use crate::detect::{detect_format, DetectedFormat};
use crate::engine::{apply_format, apply_link};
use crate::request::FormatRequest;
use crate::selection::{caret_from_host, utf16_to_char};

/// Routes Rust panics to the browser console.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = "applyFormat")]
pub fn apply_format_js(
    content: &str,
    start: usize,
    end: usize,
    request: JsValue,
) -> Result<String, JsValue> {
    let request: FormatRequest = serde_wasm_bindgen::from_value(request)?;
    let (start, end) = host_range(content, start, end);
    Ok(apply_format(content, start, end, &request))
}

#[wasm_bindgen(js_name = "applyLink")]
pub fn apply_link_js(content: &str, start: usize, end: usize, url: &str) -> String {
    let (start, end) = host_range(content, start, end);
    apply_link(content, start, end, url)
}

#[wasm_bindgen(js_name = "detectFormat")]
pub fn detect_format_js(content: &str, position: f64) -> Result<JsValue, JsValue> {
    let format = caret_from_host(position)
        .map(|units| detect_format(content, utf16_to_char(content, units)))
        .unwrap_or_default();
    to_js(&format)
}

fn host_range(content: &str, start: usize, end: usize) -> (usize, usize) {
    (utf16_to_char(content, start), utf16_to_char(content, end))
}

fn to_js(format: &DetectedFormat) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(format).map_err(JsValue::from)
}
