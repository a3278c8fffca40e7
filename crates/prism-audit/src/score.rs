//! Scoring Engine
//!
//! Weighted deduction model producing the 0-100 conformance score and
//! the ordinal WCAG level classification. Deduction constants are
//! heuristic, so they live in a configurable [`ScoreWeights`] rather
//! than as literals.

use serde::Serialize;
use std::fmt;

use crate::analysis::DetailedAnalysis;
use crate::defect::{Defect, DefectKind, Severity};

/// WCAG 2.1 conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

impl WcagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deduction weights for the scoring model
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub critical: i32,
    pub serious: i32,
    pub moderate: i32,
    pub minor: i32,
    /// Per contrast entry failing AA, on top of any emitted defect
    pub contrast_failure: i32,
    pub missing_h1: i32,
    pub improper_nesting: i32,
    /// Form advisory issue of kind "fieldset"
    pub form_grouping: i32,
    pub form_other: i32,
    pub image_missing_alt: i32,
    pub image_other: i32,
    pub keyboard_issue: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            critical: 8,
            serious: 5,
            moderate: 3,
            minor: 1,
            contrast_failure: 2,
            missing_h1: 5,
            improper_nesting: 3,
            form_grouping: 2,
            form_other: 3,
            image_missing_alt: 4,
            image_other: 1,
            keyboard_issue: 2,
        }
    }
}

impl ScoreWeights {
    pub fn severity_weight(&self, severity: Severity) -> i32 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Serious => self.serious,
            Severity::Moderate => self.moderate,
            Severity::Minor => self.minor,
        }
    }

    /// Compute the conformance score.
    ///
    /// Starts at 100 and subtracts per defect node and per analysis
    /// deduction. The running total may go negative; clamping to
    /// [0, 100] happens once at the very end so deductions cannot
    /// silently recover. Image and form issues already represented in
    /// the defect sequence are not deducted a second time.
    pub fn score(&self, defects: &[Defect], analysis: &DetailedAnalysis) -> u8 {
        let mut score: i32 = 100;

        for defect in defects {
            let instances = defect.nodes.len().max(1) as i32;
            score -= self.severity_weight(defect.severity) * instances;
        }

        let contrast_failures = analysis
            .color_contrast
            .iter()
            .filter(|c| !c.passes_aa)
            .count() as i32;
        score -= contrast_failures * self.contrast_failure;

        if !analysis.heading_structure.has_h1 {
            score -= self.missing_h1;
        }
        if !analysis.heading_structure.proper_nesting {
            score -= self.improper_nesting;
        }

        for issue in &analysis.form_analysis.issues {
            if issue.kind == "fieldset" {
                score -= self.form_grouping;
            } else if !covered_by_defect(defects, &issue.kind, &issue.locator) {
                score -= self.form_other;
            }
        }

        for issue in &analysis.image_analysis.issues {
            if covered_by_defect(defects, issue.kind.as_str(), &issue.locator) {
                continue;
            }
            score -= if issue.kind == DefectKind::MissingAlt {
                self.image_missing_alt
            } else {
                self.image_other
            };
        }

        score -= analysis.keyboard_navigation.issues.len() as i32 * self.keyboard_issue;

        score.clamp(0, 100) as u8
    }
}

fn covered_by_defect(defects: &[Defect], kind: &str, locator: &str) -> bool {
    defects.iter().any(|d| {
        d.kind.as_str() == kind && d.nodes.iter().any(|n| n.locator == locator)
    })
}

/// Classify the conformance level from defect severities alone.
///
/// Ordinal rule, independent of the numeric score: one critical
/// defect forces level A no matter how high the score is.
pub fn conformance_level(defects: &[Defect]) -> WcagLevel {
    let critical = defects.iter().any(|d| d.severity == Severity::Critical);
    let serious = defects.iter().any(|d| d.severity == Severity::Serious);

    if !critical && !serious {
        WcagLevel::AAA
    } else if !critical {
        WcagLevel::AA
    } else {
        WcagLevel::A
    }
}
