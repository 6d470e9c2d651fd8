use thiserror::Error;

use crate::outputs::Outputs;
use crate::ratio::PixelRatio;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("negative pixel value: {0}")]
    Negative(f64),
}

/// Parse a raw pixel input string.
///
/// An empty (or all-whitespace) field reads as 0 — an untouched input is
/// not an error. Anything else must parse as a finite, non-negative float.
pub fn parse_px(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let px: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_owned()))?;
    if !px.is_finite() {
        return Err(InputError::NotANumber(trimmed.to_owned()));
    }
    if px < 0.0 {
        return Err(InputError::Negative(px));
    }
    Ok(px)
}

/// The conversion itself: `dp = px / ratio`.
pub fn px_to_dp(px: f64, ratio: PixelRatio) -> f64 {
    px / ratio.get()
}

/// Converter state: the tracked device pixel ratio, the error flag, and
/// the last valid px value (kept so a ratio change can recompute without
/// re-reading the input field).
#[derive(Debug, Clone, Default)]
pub struct Converter {
    ratio: PixelRatio,
    error: bool,
    last_px: f64,
}

impl Converter {
    pub fn new(raw_ratio: f64) -> Self {
        Self {
            ratio: PixelRatio::new(raw_ratio),
            error: false,
            last_px: 0.0,
        }
    }

    pub fn ratio(&self) -> PixelRatio {
        self.ratio
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Full conversion path: parse the raw input, derive all presentation
    /// targets, and update the error flag either way.
    pub fn convert(&mut self, raw: &str) -> Result<Outputs, InputError> {
        match parse_px(raw) {
            Ok(px) => {
                self.error = false;
                self.last_px = px;
                Ok(Outputs::derive(px, self.ratio))
            }
            Err(e) => {
                self.error = true;
                Err(e)
            }
        }
    }

    /// Blur-path check: refresh the error flag without recomputing.
    pub fn validate(&mut self, raw: &str) -> Result<(), InputError> {
        match parse_px(raw) {
            Ok(_) => {
                self.error = false;
                Ok(())
            }
            Err(e) => {
                self.error = true;
                Err(e)
            }
        }
    }

    /// Record a newly observed device pixel ratio. Returns `true` when it
    /// differs from the tracked one.
    pub fn observe_ratio(&mut self, raw: f64) -> bool {
        self.ratio.observe(raw)
    }

    /// Outputs for the last valid px at the current ratio, or `None`
    /// while the error flag is up.
    pub fn current_outputs(&self) -> Option<Outputs> {
        (!self.error).then(|| Outputs::derive(self.last_px, self.ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_floats() {
        assert_eq!(parse_px("16"), Ok(16.0));
        assert_eq!(parse_px("  320 "), Ok(320.0));
        assert_eq!(parse_px("0.5"), Ok(0.5));
    }

    #[test]
    fn empty_reads_as_zero() {
        assert_eq!(parse_px(""), Ok(0.0));
        assert_eq!(parse_px("   "), Ok(0.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_px("abc"),
            Err(InputError::NotANumber("abc".to_owned()))
        );
        assert_eq!(
            parse_px("12px"),
            Err(InputError::NotANumber("12px".to_owned()))
        );
        assert_eq!(
            parse_px("inf"),
            Err(InputError::NotANumber("inf".to_owned()))
        );
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(parse_px("-5"), Err(InputError::Negative(-5.0)));
    }

    #[test]
    fn converts_sixteen_at_two() {
        let mut converter = Converter::new(2.0);
        let outputs = converter.convert("16").unwrap();
        assert_eq!(outputs.dp_text, "8.00");
        assert!(!converter.has_error());
    }

    #[test]
    fn ratio_of_one_is_identity() {
        let mut converter = Converter::new(1.0);
        let outputs = converter.convert("320").unwrap();
        assert_eq!(outputs.dp_text, "320.00");
    }

    #[test]
    fn error_raises_flag_and_blocks_current_outputs() {
        let mut converter = Converter::new(2.0);
        assert!(converter.convert("-5").is_err());
        assert!(converter.has_error());
        assert!(converter.current_outputs().is_none());
    }

    #[test]
    fn valid_input_clears_previous_error() {
        let mut converter = Converter::new(2.0);
        let _ = converter.convert("nope");
        assert!(converter.has_error());
        let outputs = converter.convert("16").unwrap();
        assert!(!converter.has_error());
        assert_eq!(outputs.dp_text, "8.00");
    }

    #[test]
    fn ratio_change_recomputes_remembered_px() {
        let mut converter = Converter::new(2.0);
        let _ = converter.convert("16").unwrap();

        assert!(converter.observe_ratio(1.0));
        let outputs = converter.current_outputs().unwrap();
        assert_eq!(outputs.dp_text, "16.00");

        // Same ratio again: no change to report.
        assert!(!converter.observe_ratio(1.0));
    }

    #[test]
    fn validate_does_not_touch_remembered_px() {
        let mut converter = Converter::new(1.0);
        let _ = converter.convert("100").unwrap();
        assert!(converter.validate("-1").is_err());
        assert!(converter.has_error());

        // A later valid blur clears the flag; the remembered px survives.
        assert!(converter.validate("").is_ok());
        let outputs = converter.current_outputs().unwrap();
        assert_eq!(outputs.dp_text, "100.00");
    }
}
