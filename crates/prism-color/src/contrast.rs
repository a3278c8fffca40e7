//! WCAG Contrast Math
//!
//! Relative luminance and contrast ratio per the WCAG 2.1 definition.

use serde::Serialize;

use crate::{ColorParseError, ColorSpec};

/// AA contrast threshold for normal text
pub const AA_THRESHOLD: f64 = 4.5;
/// AAA contrast threshold for normal text
pub const AAA_THRESHOLD: f64 = 7.0;

/// Outcome of a contrast check between two colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    /// Contrast ratio in [1, 21], rounded to two decimals
    pub ratio: f64,
    pub passes_aa: bool,
    pub passes_aaa: bool,
}

/// Relative luminance of a color, in [0, 1].
///
/// Each sRGB channel is linearized (gamma expanded), then weighted:
/// 0.2126 R + 0.7152 G + 0.0722 B.
pub fn relative_luminance(color: ColorSpec) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors.
///
/// Computed as (L_lighter + 0.05) / (L_darker + 0.05); the lighter
/// color is chosen by luminance, never by argument order, so the
/// result is symmetric. Transparent colors are rejected: a see-through
/// background is not a contrast partner.
pub fn contrast(a: ColorSpec, b: ColorSpec) -> Result<ContrastResult, ColorParseError> {
    if a.is_transparent() || b.is_transparent() {
        return Err(ColorParseError::Transparent);
    }

    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };

    let raw = (lighter + 0.05) / (darker + 0.05);

    // Thresholds are compared against the raw ratio; rounding is for
    // display only. A true 4.4997 must not round up into a pass.
    Ok(ContrastResult {
        ratio: (raw * 100.0).round() / 100.0,
        passes_aa: raw >= AA_THRESHOLD,
        passes_aaa: raw >= AAA_THRESHOLD,
    })
}
