//! Defect Sources
//!
//! Two implementations of one capability: an external baseline report
//! (a conformance-testing collaborator's findings) and the engine's
//! own manual inspection pass. The audit selects by availability; the
//! fallback is a first-class implementation, not an exception path.

use serde::{Deserialize, Serialize};

use prism_dom::Snapshot;

use crate::aggregate;
use crate::defect::{Defect, DefectKind, DefectNode, IncompleteRecord, PassRecord, Remediation, Severity};

/// Element-level defect entry from an external collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineDefect {
    pub id: String,
    pub impact: String,
    pub description: String,
    pub help: String,
    pub help_url: String,
    pub nodes: Vec<BaselineNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineNode {
    pub html: String,
    pub target: String,
    pub failure_summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselinePass {
    pub id: String,
    pub description: String,
    pub nodes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineIncomplete {
    pub id: String,
    pub description: String,
    pub nodes: usize,
}

/// Full report from the external collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaselineReport {
    #[serde(default)]
    pub violations: Vec<BaselineDefect>,
    #[serde(default)]
    pub passes: Vec<BaselinePass>,
    #[serde(default)]
    pub incomplete: Vec<BaselineIncomplete>,
}

/// What a defect source produces
#[derive(Debug, Default)]
pub struct SourceFindings {
    pub defects: Vec<Defect>,
    pub passes: Vec<PassRecord>,
    pub incomplete: Vec<IncompleteRecord>,
}

/// The source could not be reached or timed out. Recoverable: the
/// audit degrades to manual inspection and never surfaces this.
#[derive(Debug, Clone, thiserror::Error)]
#[error("defect source unavailable: {0}")]
pub struct SourceUnavailable(pub String);

/// A provider of defect findings for one snapshot
pub trait DefectSource {
    fn name(&self) -> &'static str;

    fn collect(&self, snapshot: &Snapshot) -> Result<SourceFindings, SourceUnavailable>;
}

/// Wraps a caller-supplied external report, normalizing its severity
/// vocabulary and rule identifiers into the engine's taxonomy.
#[derive(Debug, Clone)]
pub struct BaselineSource {
    report: BaselineReport,
}

impl BaselineSource {
    pub fn new(report: BaselineReport) -> Self {
        Self { report }
    }
}

impl DefectSource for BaselineSource {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn collect(&self, _snapshot: &Snapshot) -> Result<SourceFindings, SourceUnavailable> {
        let mut findings = SourceFindings::default();

        for violation in &self.report.violations {
            let kind = DefectKind::from_rule_id(&violation.id);
            let remediation = Remediation::lookup(&kind);
            findings.defects.push(Defect {
                kind,
                severity: Severity::parse(&violation.impact),
                description: violation.description.clone(),
                help: violation.help.clone(),
                help_url: violation.help_url.clone(),
                how_to_fix: remediation.how_to_fix.to_string(),
                code_example: remediation.code_example.to_string(),
                nodes: violation
                    .nodes
                    .iter()
                    .map(|n| DefectNode {
                        html: n.html.clone(),
                        locator: n.target.clone(),
                        failure_summary: n.failure_summary.clone(),
                    })
                    .collect(),
            });
        }

        for pass in &self.report.passes {
            findings.passes.push(PassRecord {
                rule: pass.id.clone(),
                description: pass.description.clone(),
                nodes: pass.nodes,
            });
        }

        for entry in &self.report.incomplete {
            let reason = if entry.description.to_lowercase().contains("color") {
                "Manual verification needed for color-dependent content"
            } else {
                "Requires manual testing"
            };
            findings.incomplete.push(IncompleteRecord {
                rule: entry.id.clone(),
                description: entry.description.clone(),
                nodes: entry.nodes,
                reason: reason.to_string(),
            });
        }

        Ok(findings)
    }
}

/// The engine's own inspection pass as a defect source. This is the
/// fallback when no baseline is available, and directly testable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualInspection;

impl DefectSource for ManualInspection {
    fn name(&self) -> &'static str {
        "manual-inspection"
    }

    fn collect(&self, snapshot: &Snapshot) -> Result<SourceFindings, SourceUnavailable> {
        let run = aggregate::run_inspectors(snapshot);
        Ok(SourceFindings {
            defects: run.defects,
            passes: run.passes,
            incomplete: run.incomplete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_dom::SnapshotBuilder;

    fn empty_snapshot() -> Snapshot {
        SnapshotBuilder::new().build()
    }

    #[test]
    fn test_baseline_normalization() {
        let report = BaselineReport {
            violations: vec![BaselineDefect {
                id: "image-alt".to_string(),
                impact: "critical".to_string(),
                description: "Images must have alternate text".to_string(),
                help: "Ensure img elements have alternate text".to_string(),
                help_url: "https://dequeuniversity.com/rules/axe/4.7/image-alt".to_string(),
                nodes: vec![BaselineNode {
                    html: "<img src=\"hero.jpg\">".to_string(),
                    target: ".hero-image".to_string(),
                    failure_summary: "Element does not have an alt attribute".to_string(),
                }],
            }],
            passes: vec![],
            incomplete: vec![BaselineIncomplete {
                id: "color-contrast-enhanced".to_string(),
                description: "Elements must have sufficient color contrast (Enhanced)".to_string(),
                nodes: 5,
            }],
        };

        let findings = BaselineSource::new(report).collect(&empty_snapshot()).unwrap();
        assert_eq!(findings.defects.len(), 1);
        assert_eq!(findings.defects[0].kind, DefectKind::MissingAlt);
        assert_eq!(findings.defects[0].severity, Severity::Critical);
        // Remediation is attached during normalization
        assert!(!findings.defects[0].how_to_fix.is_empty());
        assert!(findings.incomplete[0].reason.contains("color"));
    }

    #[test]
    fn test_baseline_report_deserializes_external_shape() {
        let json = r#"{
            "violations": [{
                "id": "label",
                "impact": "serious",
                "description": "Form elements must have labels",
                "help": "Ensure every form element has a label",
                "helpUrl": "https://dequeuniversity.com/rules/axe/4.7/label",
                "nodes": [{
                    "html": "<input type=\"text\">",
                    "target": "/form[1]/input[1]",
                    "failureSummary": "Form element does not have an associated label"
                }]
            }]
        }"#;
        let report: BaselineReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].help_url, "https://dequeuniversity.com/rules/axe/4.7/label");
    }

    #[test]
    fn test_manual_inspection_source() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.element(body, "img", &[("src", "x.png")]);
        let snapshot = b.build();

        let findings = ManualInspection.collect(&snapshot).unwrap();
        assert_eq!(findings.defects.len(), 1);
        assert_eq!(findings.defects[0].kind, DefectKind::MissingAlt);
    }
}
