//! WASM bindings for mathscribe
//!
//! This module provides the JavaScript-accessible functions the web
//! frontend calls on every render pass, keystroke, and palette click.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::Serialize;

/// Safely serialize a value to JsValue, returning JS `null` on failure.
///
/// This prevents panics from `unwrap()` when serialization fails.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Strip control characters and trim the ends.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "sanitizeText")]
pub fn sanitize_text_wasm(input: &str) -> String {
    crate::sanitize(input)
}

/// Restore missing escape prefixes on known math commands.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "repairText")]
pub fn repair_text_wasm(input: &str) -> String {
    crate::repair(input)
}

/// Sanitize + repair, the full normalization pipeline.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalizeText")]
pub fn normalize_text_wasm(input: &str) -> String {
    crate::normalize(input)
}

/// Split text into `{kind, span, content}` segments for rendering.
///
/// # Returns
/// An array of segment objects; `kind` is `"text"` or `"formula"`.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "segmentText")]
pub fn segment_text_wasm(input: &str) -> JsValue {
    let document = crate::segment(input);
    to_js_value(&document.segments)
}

/// Convert natural linear notation to the LaTeX dialect.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "toLatex")]
pub fn to_latex_wasm(input: &str) -> String {
    crate::to_latex(input)
}

/// Convert the LaTeX dialect to natural linear notation.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "toNatural")]
pub fn to_natural_wasm(input: &str) -> String {
    crate::to_natural(input)
}

/// Convert the LaTeX dialect to a human-readable one-line string.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "toPlain")]
pub fn to_plain_wasm(input: &str) -> String {
    crate::to_plain(input)
}

/// Selection-aware palette insertion.
///
/// # Returns
/// `{buffer, selStart, selEnd}`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "insertSymbol")]
pub fn insert_symbol_wasm(
    buffer: &str,
    sel_start: usize,
    sel_end: usize,
    prefix: &str,
    suffix: &str,
    cursor_offset: i32,
) -> JsValue {
    let outcome = crate::insert(buffer, sel_start, sel_end, prefix, suffix, cursor_offset);
    let result = InsertResult {
        buffer: outcome.buffer,
        sel_start: outcome.sel_start,
        sel_end: outcome.sel_end,
    };
    to_js_value(&result)
}

/// Insertion result passed back to the editing surface
#[cfg(feature = "wasm")]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub buffer: String,
    pub sel_start: usize,
    pub sel_end: usize,
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
