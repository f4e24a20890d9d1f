//! WASM bindings for tikz2cetz
//!
//! This module exposes the string-level TikZ → CeTZ conversion to JavaScript.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert TikZ source to a CeTZ document
///
/// # Arguments
/// * `input` - TikZ source, one declaration per line
///
/// # Returns
/// CeTZ source; the error message names the offending line
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "tikzToCetz")]
pub fn tikz_to_cetz_wasm(input: &str) -> Result<String, JsValue> {
    crate::convert_tikz_to_cetz(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert TikZ source, importing `style_file` instead of the default
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "tikzToCetzWithStyleFile")]
pub fn tikz_to_cetz_with_style_file_wasm(input: &str, style_file: &str) -> Result<String, JsValue> {
    let options = crate::CetzOptions::new().with_style_file(style_file);
    crate::convert_tikz_to_cetz_with_options(input, &options)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
