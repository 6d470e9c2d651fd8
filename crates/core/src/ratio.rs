use serde::{Deserialize, Serialize};

/// Last-known device pixel ratio.
///
/// Browsers report the ratio of physical to logical pixels; it changes at
/// runtime when the window moves across monitors or the page is zoomed.
/// Raw values that are non-finite or not positive fall back to 1.0,
/// matching the `window.devicePixelRatio || 1` convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRatio(f64);

impl PixelRatio {
    pub fn new(raw: f64) -> Self {
        if raw.is_finite() && raw > 0.0 {
            Self(raw)
        } else {
            Self(1.0)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Record a newly observed raw ratio. Returns `true` when it differs
    /// from the tracked one. Exact comparison: browsers report discrete
    /// ratio steps, not drifting floats.
    pub fn observe(&mut self, raw: f64) -> bool {
        let next = Self::new(raw);
        let changed = next.0 != self.0;
        self.0 = next.0;
        changed
    }

    /// Two-decimal display text, e.g. "2.00".
    pub fn display(self) -> String {
        format!("{:.2}", self.0)
    }
}

impl Default for PixelRatio {
    fn default() -> Self {
        Self(1.0)
    }
}
