//! Detailed Analysis
//!
//! The five inspector sub-reports bundled into an audit result.

use serde::Serialize;

use crate::defect::DefectKind;

/// Bundle of the five inspector sub-reports
#[derive(Debug, Clone, Default, Serialize)]
pub struct DetailedAnalysis {
    pub color_contrast: Vec<ContrastEntry>,
    pub heading_structure: HeadingAnalysis,
    pub form_analysis: FormAnalysis,
    pub image_analysis: ImageAnalysis,
    pub keyboard_navigation: KeyboardAnalysis,
}

/// Per-node contrast measurement, recorded pass or fail
#[derive(Debug, Clone, Serialize)]
pub struct ContrastEntry {
    pub element: String,
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub passes_aa: bool,
    pub passes_aaa: bool,
    pub recommendation: String,
}

/// One heading in document order
#[derive(Debug, Clone, Serialize)]
pub struct HeadingEntry {
    pub level: u8,
    pub text: String,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HeadingAnalysis {
    pub structure: Vec<HeadingEntry>,
    pub has_h1: bool,
    pub proper_nesting: bool,
    pub recommendations: Vec<String>,
}

/// Form-level advisory issue
#[derive(Debug, Clone, Serialize)]
pub struct FormIssue {
    /// Issue class: "fieldset" for grouping advisories, otherwise the
    /// kind of the defect this issue mirrors
    pub kind: String,
    pub locator: String,
    pub description: String,
    pub fix: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FormAnalysis {
    pub total_forms: usize,
    pub forms_with_labels: usize,
    pub forms_with_fieldsets: usize,
    pub labeled_controls: usize,
    pub issues: Vec<FormIssue>,
}

/// Per-image issue, mirroring any emitted image defect
#[derive(Debug, Clone, Serialize)]
pub struct ImageIssue {
    pub src: String,
    pub locator: String,
    pub kind: DefectKind,
    pub issue: String,
    pub fix: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageAnalysis {
    pub total_images: usize,
    pub images_with_alt: usize,
    pub decorative_images: usize,
    pub issues: Vec<ImageIssue>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct KeyboardAnalysis {
    pub focusable_elements: usize,
    pub elements_with_tabindex: usize,
    pub skip_links: usize,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}
