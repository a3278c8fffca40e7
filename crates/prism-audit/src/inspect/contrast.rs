//! Contrast Inspector
//!
//! Checks every element carrying both a resolved foreground and a
//! non-transparent background color against the WCAG AA threshold.
//! A node whose colors cannot be parsed is skipped, never failed.

use prism_color::{contrast, ColorSpec, ContrastResult, AA_THRESHOLD, AAA_THRESHOLD};
use prism_dom::Snapshot;

use crate::analysis::ContrastEntry;
use crate::defect::{Defect, DefectKind, DefectNode, Severity};
use crate::inspect::render_snippet;

#[derive(Debug, Default)]
pub struct ContrastOutcome {
    pub defects: Vec<Defect>,
    pub entries: Vec<ContrastEntry>,
}

pub fn inspect(snapshot: &Snapshot) -> ContrastOutcome {
    let mut outcome = ContrastOutcome::default();

    for (id, el) in snapshot.elements() {
        let Some(style) = &el.style else { continue };
        let (Some(fg_decl), Some(bg_decl)) = (&style.color, &style.background_color) else {
            continue;
        };

        // Unparsable or transparent colors drop the node from the
        // contrast pass entirely; they are not treated as black.
        let Ok(fg) = ColorSpec::parse(fg_decl) else { continue };
        let Ok(bg) = ColorSpec::parse(bg_decl) else { continue };
        let Ok(result) = contrast(fg, bg) else { continue };

        let locator = snapshot.locator(id).unwrap_or_default().to_string();

        if !result.passes_aa {
            outcome.defects.push(Defect::new(
                DefectKind::InsufficientContrast,
                Severity::Serious,
                "Elements must have sufficient color contrast",
                "Ensure all text elements have sufficient contrast against their background",
                "https://dequeuniversity.com/rules/axe/4.7/color-contrast",
                DefectNode {
                    html: render_snippet(el),
                    locator: locator.clone(),
                    failure_summary: format!(
                        "Element has insufficient color contrast of {:.2}:1 \
                         (foreground color: {fg_decl}, background color: {bg_decl}). \
                         Expected contrast ratio of {AA_THRESHOLD}:1",
                        result.ratio
                    ),
                },
            ));
        }

        outcome.entries.push(ContrastEntry {
            element: locator,
            foreground: fg_decl.clone(),
            background: bg_decl.clone(),
            ratio: result.ratio,
            passes_aa: result.passes_aa,
            passes_aaa: result.passes_aaa,
            recommendation: recommendation(&result),
        });
    }

    tracing::debug!(
        entries = outcome.entries.len(),
        failures = outcome.defects.len(),
        "contrast inspection complete"
    );
    outcome
}

fn recommendation(result: &ContrastResult) -> String {
    if result.passes_aaa {
        "Excellent contrast ratio".to_string()
    } else if result.passes_aa {
        format!(
            "Good contrast ratio, consider improving for AAA compliance ({AAA_THRESHOLD}:1 required)"
        )
    } else {
        let improvement = ((AA_THRESHOLD / result.ratio) * 100.0).ceil() - 100.0;
        format!(
            "Increase contrast by {improvement:.0}% to meet AA standards. \
             Current: {:.2}:1, Required: {AA_THRESHOLD}:1",
            result.ratio
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_dom::SnapshotBuilder;

    #[test]
    fn test_low_contrast_emits_serious_defect() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.styled_element(body, "p", &[], Some("#999999"), Some("#ffffff"));
        let snapshot = b.build();

        let outcome = inspect(&snapshot);
        assert_eq!(outcome.defects.len(), 1);
        assert_eq!(outcome.defects[0].severity, Severity::Serious);
        assert_eq!(outcome.defects[0].kind, DefectKind::InsufficientContrast);
        assert_eq!(outcome.entries.len(), 1);
        assert!(!outcome.entries[0].passes_aa);
        assert!(outcome.entries[0].recommendation.contains("Increase contrast"));
    }

    #[test]
    fn test_passing_contrast_still_recorded() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.styled_element(body, "p", &[], Some("#000000"), Some("#ffffff"));
        let snapshot = b.build();

        let outcome = inspect(&snapshot);
        assert!(outcome.defects.is_empty());
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].recommendation, "Excellent contrast ratio");
    }

    #[test]
    fn test_aa_but_not_aaa_notes_threshold() {
        // #666666 on #ffffff is about 5.74:1
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.styled_element(body, "p", &[], Some("#666666"), Some("#ffffff"));
        let snapshot = b.build();

        let outcome = inspect(&snapshot);
        assert!(outcome.defects.is_empty());
        assert!(outcome.entries[0].passes_aa);
        assert!(!outcome.entries[0].passes_aaa);
        assert!(outcome.entries[0].recommendation.contains("AAA"));
    }

    #[test]
    fn test_transparent_background_skipped() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.styled_element(body, "span", &[], Some("#000000"), Some("rgba(0, 0, 0, 0)"));
        let snapshot = b.build();

        let outcome = inspect(&snapshot);
        assert!(outcome.defects.is_empty());
        assert!(outcome.entries.is_empty());
    }

    #[test]
    fn test_unparsable_color_skipped() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.styled_element(body, "span", &[], Some("var(--ink)"), Some("#ffffff"));
        b.styled_element(body, "p", &[], Some("#999999"), Some("#ffffff"));
        let snapshot = b.build();

        // The broken node is absent; the valid one is still checked.
        let outcome = inspect(&snapshot);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.defects.len(), 1);
    }

    #[test]
    fn test_multibyte_hex_skips_node_not_pass() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.styled_element(body, "span", &[], Some("#aé"), Some("#ffffff"));
        b.styled_element(body, "p", &[], Some("#999999"), Some("#ffffff"));
        let snapshot = b.build();

        // Non-ASCII hex is a per-node parse error, not an abort of
        // the whole pass; the sibling still gets its entry and defect.
        let outcome = inspect(&snapshot);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.defects.len(), 1);
        assert_eq!(outcome.entries[0].foreground, "#999999");
    }
}
