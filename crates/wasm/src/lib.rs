use px2dp_core::{px_to_dp, Converter, PixelRatio};
use wasm_bindgen::prelude::*;

/// Convert a raw pixel input string at the given device pixel ratio.
/// Returns the derived presentation values (dp text, visual label, CSS
/// snippet, capped box width) as JSON.
#[wasm_bindgen]
pub fn convert(raw: &str, dpr: f64) -> Result<String, JsError> {
    let mut converter = Converter::new(dpr);
    let outputs = converter
        .convert(raw)
        .map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&outputs).map_err(|e| JsError::new(&e.to_string()))
}

/// Numeric dp for a numeric px.
#[wasm_bindgen]
pub fn convert_px(px: f64, dpr: f64) -> Result<f64, JsError> {
    if !px.is_finite() {
        return Err(JsError::new("px must be a finite number"));
    }
    if px < 0.0 {
        return Err(JsError::new(&format!("negative pixel value: {px}")));
    }
    Ok(px_to_dp(px, PixelRatio::new(dpr)))
}

/// Two-decimal display text for a device pixel ratio, e.g. "2.00".
/// Non-finite or non-positive ratios read as 1.0.
#[wasm_bindgen]
pub fn format_ratio(dpr: f64) -> String {
    PixelRatio::new(dpr).display()
}
