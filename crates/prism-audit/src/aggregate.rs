//! Defect Aggregator
//!
//! Runs the five inspectors over one snapshot, converts inspector
//! failures into incomplete records, derives pass records, and merges
//! external baseline defects with the manual findings.
//!
//! Ordering is stable: inspector execution order (contrast, headings,
//! forms, images, keyboard), then document order within each.

use std::panic::{catch_unwind, AssertUnwindSafe};

use prism_dom::Snapshot;

use crate::analysis::DetailedAnalysis;
use crate::defect::{Defect, IncompleteRecord, PassRecord};
use crate::inspect;

/// Everything one manual inspection pass produced
#[derive(Debug, Default)]
pub struct InspectionRun {
    pub defects: Vec<Defect>,
    pub passes: Vec<PassRecord>,
    pub incomplete: Vec<IncompleteRecord>,
    pub analysis: DetailedAnalysis,
}

/// Run all five inspectors. A panicking inspector is recorded as an
/// incomplete rule and never aborts the other four.
pub fn run_inspectors(snapshot: &Snapshot) -> InspectionRun {
    let mut run = InspectionRun::default();

    match catch_unwind(AssertUnwindSafe(|| inspect::contrast::inspect(snapshot))) {
        Ok(outcome) => {
            run.defects.extend(outcome.defects);
            run.analysis.color_contrast = outcome.entries;
        }
        Err(_) => run.incomplete.push(failure_record("color-contrast")),
    }

    match catch_unwind(AssertUnwindSafe(|| inspect::headings::inspect(snapshot))) {
        Ok(outcome) => {
            run.defects.extend(outcome.defects);
            run.analysis.heading_structure = outcome.analysis;
        }
        Err(_) => run.incomplete.push(failure_record("heading-order")),
    }

    match catch_unwind(AssertUnwindSafe(|| inspect::forms::inspect(snapshot))) {
        Ok(outcome) => {
            run.defects.extend(outcome.defects);
            run.analysis.form_analysis = outcome.analysis;
        }
        Err(_) => run.incomplete.push(failure_record("label")),
    }

    match catch_unwind(AssertUnwindSafe(|| inspect::images::inspect(snapshot))) {
        Ok(outcome) => {
            run.defects.extend(outcome.defects);
            run.analysis.image_analysis = outcome.analysis;
        }
        Err(_) => run.incomplete.push(failure_record("image-alt")),
    }

    match catch_unwind(AssertUnwindSafe(|| inspect::keyboard::inspect(snapshot))) {
        Ok(analysis) => run.analysis.keyboard_navigation = analysis,
        Err(_) => run.incomplete.push(failure_record("keyboard-navigation")),
    }

    run.passes = derive_passes(&run);
    run
}

fn failure_record(rule: &str) -> IncompleteRecord {
    IncompleteRecord {
        rule: rule.to_string(),
        description: format!("Automated analysis failed for rule {rule}; manual review required"),
        nodes: 0,
        reason: "Inspector error".to_string(),
    }
}

/// Pass records for rules that found compliant nodes
fn derive_passes(run: &InspectionRun) -> Vec<PassRecord> {
    let mut passes = Vec::new();

    let aa_passing = run
        .analysis
        .color_contrast
        .iter()
        .filter(|c| c.passes_aa)
        .count();
    if aa_passing > 0 {
        passes.push(PassRecord {
            rule: "color-contrast".to_string(),
            description: "Elements have sufficient color contrast".to_string(),
            nodes: aa_passing,
        });
    }

    let headings = &run.analysis.heading_structure;
    if !headings.structure.is_empty() && headings.proper_nesting {
        passes.push(PassRecord {
            rule: "heading-order".to_string(),
            description: "Headings are in a logical order".to_string(),
            nodes: headings.structure.len(),
        });
    }

    if run.analysis.form_analysis.labeled_controls > 0 {
        passes.push(PassRecord {
            rule: "label".to_string(),
            description: "Form elements have labels".to_string(),
            nodes: run.analysis.form_analysis.labeled_controls,
        });
    }

    let images = &run.analysis.image_analysis;
    let images_missing_alt = images
        .issues
        .iter()
        .filter(|i| i.kind == crate::defect::DefectKind::MissingAlt)
        .count();
    let images_passing = images.total_images.saturating_sub(images_missing_alt);
    if images_passing > 0 {
        passes.push(PassRecord {
            rule: "image-alt".to_string(),
            description: "Images have alternate text".to_string(),
            nodes: images_passing,
        });
    }

    passes
}

/// Merge externally sourced defects into the manual sequence.
///
/// De-duplication key is (kind, locator of the first affected node);
/// the richer entry wins, keeping the position of the first
/// occurrence so ordering stays stable.
pub fn merge_defects(mut defects: Vec<Defect>, external: Vec<Defect>) -> Vec<Defect> {
    for candidate in external {
        let duplicate = defects.iter_mut().find(|existing| {
            existing.kind == candidate.kind
                && existing.nodes.first().map(|n| n.locator.as_str())
                    == candidate.nodes.first().map(|n| n.locator.as_str())
        });
        match duplicate {
            Some(existing) => {
                if richness(&candidate) > richness(existing) {
                    *existing = candidate;
                }
            }
            None => defects.push(candidate),
        }
    }
    defects
}

fn richness(defect: &Defect) -> usize {
    let annotated = usize::from(!defect.how_to_fix.is_empty())
        + usize::from(!defect.code_example.is_empty());
    defect.nodes.len() * 2
        + annotated
        + defect
            .nodes
            .iter()
            .map(|n| usize::from(!n.failure_summary.is_empty()))
            .sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defect::{DefectKind, DefectNode, Severity};
    use prism_dom::SnapshotBuilder;

    fn defect(kind: DefectKind, locator: &str, failure: &str) -> Defect {
        Defect::new(
            kind,
            Severity::Critical,
            "desc",
            "help",
            "https://example.com",
            DefectNode {
                html: String::new(),
                locator: locator.to_string(),
                failure_summary: failure.to_string(),
            },
        )
    }

    #[test]
    fn test_merge_dedupes_by_kind_and_locator() {
        let manual = vec![defect(DefectKind::MissingAlt, "/body[1]/img[1]", "")];
        let external = vec![defect(
            DefectKind::MissingAlt,
            "/body[1]/img[1]",
            "Element does not have an alt attribute",
        )];

        let merged = merge_defects(manual, external);
        assert_eq!(merged.len(), 1);
        // The richer (annotated) entry won
        assert!(!merged[0].nodes[0].failure_summary.is_empty());
    }

    #[test]
    fn test_merge_keeps_distinct_locators() {
        let manual = vec![defect(DefectKind::MissingAlt, "/body[1]/img[1]", "x")];
        let external = vec![defect(DefectKind::MissingAlt, "/body[1]/img[2]", "y")];
        assert_eq!(merge_defects(manual, external).len(), 2);
    }

    #[test]
    fn test_run_inspectors_produces_passes() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        let h1 = b.element(body, "h1", &[]);
        b.text(h1, "Title");
        b.element(body, "img", &[("src", "a.png"), ("alt", "Chart")]);
        b.styled_element(body, "p", &[], Some("#000000"), Some("#ffffff"));
        let run = run_inspectors(&b.build());

        assert!(run.defects.is_empty());
        let rules: Vec<&str> = run.passes.iter().map(|p| p.rule.as_str()).collect();
        assert_eq!(rules, vec!["color-contrast", "heading-order", "image-alt"]);
    }

    #[test]
    fn test_defect_order_is_stable() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        let h1 = b.element(body, "h1", &[]);
        b.text(h1, "Title");
        let h3 = b.element(body, "h3", &[]);
        b.text(h3, "Skipped");
        b.element(body, "img", &[("src", "x.png")]);
        b.styled_element(body, "p", &[], Some("#999999"), Some("#ffffff"));
        let run = run_inspectors(&b.build());

        let kinds: Vec<&str> = run.defects.iter().map(|d| d.kind.as_str()).collect();
        // Inspector execution order: contrast, headings, forms, images
        assert_eq!(kinds, vec!["insufficient-contrast", "heading-skip", "missing-alt"]);
    }
}
