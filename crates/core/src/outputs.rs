use serde::{Deserialize, Serialize};

use crate::convert::px_to_dp;
use crate::ratio::PixelRatio;

/// Display cap for the proportional visual box, in logical px.
pub const MAX_BOX_WIDTH_PX: f64 = 400.0;

/// The derived presentation values for one conversion.
///
/// Everything the page shows is derived here, so the DOM layer and the
/// wasm bridge stay write-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    /// Raw dp value, unrounded.
    pub dp: f64,
    /// dp formatted to two decimals, e.g. "8.00".
    pub dp_text: String,
    /// Visual label, e.g. "8.00dp".
    pub label: String,
    /// CSS recommendation, e.g. "width: 16px; /* or 8.00dp */".
    pub css: String,
    /// Width of the visual box, capped at [`MAX_BOX_WIDTH_PX`].
    pub box_width: f64,
}

impl Outputs {
    /// Compute all four presentation targets for a px value.
    pub fn derive(px: f64, ratio: PixelRatio) -> Self {
        let dp = px_to_dp(px, ratio);
        let dp_text = format!("{dp:.2}");
        Self {
            dp,
            label: format!("{dp_text}dp"),
            css: format!("width: {px}px; /* or {dp_text}dp */"),
            box_width: dp.min(MAX_BOX_WIDTH_PX),
            dp_text,
        }
    }

    /// Error-state rendition: zero dp, blank text, collapsed box.
    pub fn blank() -> Self {
        Self {
            dp: 0.0,
            dp_text: String::new(),
            label: String::new(),
            css: String::new(),
            box_width: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_targets() {
        let outputs = Outputs::derive(16.0, PixelRatio::new(2.0));
        assert_eq!(outputs.dp, 8.0);
        assert_eq!(outputs.dp_text, "8.00");
        assert_eq!(outputs.label, "8.00dp");
        assert_eq!(outputs.css, "width: 16px; /* or 8.00dp */");
        assert_eq!(outputs.box_width, 8.0);
    }

    #[test]
    fn fractional_px_keeps_exact_css_value() {
        let outputs = Outputs::derive(16.5, PixelRatio::new(2.0));
        assert_eq!(outputs.dp_text, "8.25");
        assert_eq!(outputs.css, "width: 16.5px; /* or 8.25dp */");
    }

    #[test]
    fn box_width_is_capped() {
        let outputs = Outputs::derive(500.0, PixelRatio::new(1.0));
        assert_eq!(outputs.dp_text, "500.00");
        assert_eq!(outputs.box_width, MAX_BOX_WIDTH_PX);

        // Just under the cap stays proportional.
        let outputs = Outputs::derive(399.0, PixelRatio::new(1.0));
        assert_eq!(outputs.box_width, 399.0);
    }

    #[test]
    fn blank_is_zeroed() {
        let blank = Outputs::blank();
        assert_eq!(blank.dp, 0.0);
        assert!(blank.dp_text.is_empty());
        assert!(blank.label.is_empty());
        assert!(blank.css.is_empty());
        assert_eq!(blank.box_width, 0.0);
    }

    #[test]
    fn serializes_for_the_bridge() {
        let outputs = Outputs::derive(16.0, PixelRatio::new(2.0));
        let json = serde_json::to_string(&outputs).unwrap();
        let back: Outputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outputs);
    }
}
