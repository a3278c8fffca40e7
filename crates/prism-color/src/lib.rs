//! Prism Colorimetry
//!
//! Color parsing and WCAG contrast math for the Prism audit engine.
//!
//! Features:
//! - ColorSpec parsing (hex, named, rgb()/rgba())
//! - Relative luminance (linearized sRGB)
//! - Contrast ratio with AA/AAA verdicts

mod spec;
mod contrast;

pub use spec::{ColorSpec, ColorParseError};
pub use contrast::{contrast, relative_luminance, ContrastResult, AA_THRESHOLD, AAA_THRESHOLD};
