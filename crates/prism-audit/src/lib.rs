//! Prism Audit
//!
//! WCAG accessibility audit and scoring engine.
//!
//! Features:
//! - Five tree inspectors (contrast, headings, forms, images, keyboard)
//! - External baseline defect normalization with manual fallback
//! - Weighted 0-100 conformance score and A/AA/AAA classification
//! - Serializable results and a Markdown report
//!
//! # Example
//! ```rust,ignore
//! use prism_audit::Auditor;
//! use prism_dom::SnapshotBuilder;
//!
//! let snapshot = /* built by the renderer adapter */;
//! let result = Auditor::new().audit(&snapshot)?;
//! println!("score: {}/100 ({})", result.score, result.wcag_level);
//! ```

mod defect;
mod analysis;
mod inspect;
mod source;
mod aggregate;
mod score;
mod result;
mod report;

pub use defect::{Defect, DefectKind, DefectNode, IncompleteRecord, PassRecord, Remediation, Severity};
pub use analysis::{
    ContrastEntry, DetailedAnalysis, FormAnalysis, FormIssue, HeadingAnalysis, HeadingEntry,
    ImageAnalysis, ImageIssue, KeyboardAnalysis,
};
pub use source::{
    BaselineDefect, BaselineIncomplete, BaselineNode, BaselinePass, BaselineReport,
    BaselineSource, DefectSource, ManualInspection, SourceFindings, SourceUnavailable,
};
pub use score::{conformance_level, ScoreWeights, WcagLevel};
pub use result::{AuditResult, Summary};
pub use report::{compose_report, ReportOptions, REPORT_VERSION};

use prism_dom::Snapshot;

/// Audit error
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Document snapshot contains no elements")]
    EmptySnapshot,
}

/// Stateless audit entry point.
///
/// Holds no state between calls; each invocation runs the inspectors
/// fresh over the supplied snapshot. Weights are injected at
/// construction rather than read from globals.
#[derive(Debug, Clone, Default)]
pub struct Auditor {
    weights: ScoreWeights,
}

impl Auditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Audit from the engine's own inspectors only
    pub fn audit(&self, snapshot: &Snapshot) -> Result<AuditResult, AuditError> {
        self.run(snapshot, None)
    }

    /// Audit with an external baseline source. If the source is
    /// unavailable the audit degrades to manual inspection; the
    /// returned result is still complete.
    pub fn audit_with_source(
        &self,
        snapshot: &Snapshot,
        source: &dyn DefectSource,
    ) -> Result<AuditResult, AuditError> {
        self.run(snapshot, Some(source))
    }

    fn run(
        &self,
        snapshot: &Snapshot,
        source: Option<&dyn DefectSource>,
    ) -> Result<AuditResult, AuditError> {
        if snapshot.is_empty() {
            return Err(AuditError::EmptySnapshot);
        }

        tracing::info!(elements = snapshot.element_count(), "starting accessibility audit");

        let run = aggregate::run_inspectors(snapshot);
        let mut defects = run.defects;
        let mut passes = run.passes;
        let mut incomplete = run.incomplete;

        if let Some(source) = source {
            match source.collect(snapshot) {
                Ok(findings) => {
                    defects = aggregate::merge_defects(defects, findings.defects);
                    passes.extend(findings.passes);
                    incomplete.extend(findings.incomplete);
                }
                Err(err) => {
                    tracing::warn!(
                        source = source.name(),
                        error = %err,
                        "baseline source unavailable, continuing with manual inspection only"
                    );
                }
            }
        }

        let score = self.weights.score(&defects, &run.analysis);
        let wcag_level = conformance_level(&defects);
        tracing::info!(score, level = %wcag_level, defects = defects.len(), "audit complete");

        let summary = Summary {
            defects: defects.len(),
            passes: passes.len(),
            incomplete: incomplete.len(),
            score,
            wcag_level,
            total_elements: snapshot.element_count(),
            tested_elements: defects.len() + passes.len(),
        };

        Ok(AuditResult {
            score,
            wcag_level,
            defects,
            passes,
            incomplete,
            summary,
            detailed_analysis: run.analysis,
        })
    }
}
