//! Heading Inspector
//!
//! Validates the document's heading outline: level sequence, empty
//! headings, over-long text, and presence of a top-level heading.

use prism_dom::Snapshot;

use crate::analysis::{HeadingAnalysis, HeadingEntry};
use crate::defect::{Defect, DefectKind, DefectNode, Severity};
use crate::inspect::render_snippet;

const MAX_HEADING_LENGTH: usize = 120;

#[derive(Debug, Default)]
pub struct HeadingOutcome {
    pub defects: Vec<Defect>,
    pub analysis: HeadingAnalysis,
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

pub fn inspect(snapshot: &Snapshot) -> HeadingOutcome {
    let mut outcome = HeadingOutcome::default();
    outcome.analysis.proper_nesting = true;

    let mut previous_level: Option<u8> = None;

    for (id, el) in snapshot.elements() {
        let Some(level) = heading_level(&el.tag) else { continue };
        let text = snapshot.text_content(id);
        let locator = snapshot.locator(id).unwrap_or_default().to_string();
        let mut issues = Vec::new();

        if text.is_empty() {
            issues.push("Heading is empty".to_string());
            outcome.defects.push(Defect::new(
                DefectKind::HeadingEmpty,
                Severity::Moderate,
                "Headings must not be empty",
                "Ensure every heading conveys the structure of the section it introduces",
                "https://dequeuniversity.com/rules/axe/4.7/empty-heading",
                DefectNode {
                    html: render_snippet(el),
                    locator: locator.clone(),
                    failure_summary: format!("h{level} element has no text content"),
                },
            ));
        } else if text.chars().count() > MAX_HEADING_LENGTH {
            issues.push("Heading text is too long".to_string());
            outcome.defects.push(Defect::new(
                DefectKind::HeadingTooLong,
                Severity::Minor,
                "Heading text should be concise",
                "Keep headings scannable; move detail into body text",
                "https://dequeuniversity.com/rules/axe/4.7/heading-order",
                DefectNode {
                    html: render_snippet(el),
                    locator: locator.clone(),
                    failure_summary: format!(
                        "Heading text is {} characters; keep it under {MAX_HEADING_LENGTH}",
                        text.chars().count()
                    ),
                },
            ));
        }

        if let Some(prev) = previous_level {
            if level > prev + 1 {
                issues.push(format!("Skips heading level {}", prev + 1));
                outcome.analysis.proper_nesting = false;
                outcome.defects.push(Defect::new(
                    DefectKind::HeadingSkip,
                    Severity::Moderate,
                    "Heading levels should only increase by one",
                    "Ensure headings are in a logical order",
                    "https://dequeuniversity.com/rules/axe/4.7/heading-order",
                    DefectNode {
                        html: render_snippet(el),
                        locator,
                        failure_summary: format!(
                            "Heading order invalid - h{level} follows h{prev} without h{}",
                            prev + 1
                        ),
                    },
                ));
            }
        }
        previous_level = Some(level);

        outcome.analysis.structure.push(HeadingEntry { level, text, issues });
    }

    outcome.analysis.has_h1 = outcome.analysis.structure.iter().any(|h| h.level == 1);

    // Advisory recommendations; missing H1 deducts from the score but
    // is not a hard defect.
    if !outcome.analysis.has_h1 {
        outcome
            .analysis
            .recommendations
            .push("Add an H1 heading to the page".to_string());
    }
    if !outcome.analysis.proper_nesting {
        outcome
            .analysis
            .recommendations
            .push("Fix heading hierarchy - avoid skipping levels".to_string());
    }
    if outcome.analysis.structure.is_empty() {
        outcome
            .analysis
            .recommendations
            .push("Add headings to structure your content".to_string());
    }

    tracing::debug!(
        headings = outcome.analysis.structure.len(),
        proper_nesting = outcome.analysis.proper_nesting,
        "heading inspection complete"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_dom::SnapshotBuilder;

    fn snapshot_with_headings(levels: &[u8]) -> prism_dom::Snapshot {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        for (i, level) in levels.iter().enumerate() {
            let h = b.element(body, &format!("h{level}"), &[]);
            b.text(h, &format!("Heading {i}"));
        }
        b.build()
    }

    #[test]
    fn test_skip_produces_exactly_one_defect() {
        let outcome = inspect(&snapshot_with_headings(&[1, 3]));
        let skips: Vec<_> = outcome
            .defects
            .iter()
            .filter(|d| d.kind == DefectKind::HeadingSkip)
            .collect();
        assert_eq!(skips.len(), 1);
        assert_eq!(skips[0].severity, Severity::Moderate);
        assert!(!outcome.analysis.proper_nesting);
    }

    #[test]
    fn test_ordered_sequence_is_clean() {
        let outcome = inspect(&snapshot_with_headings(&[1, 2, 3]));
        assert!(outcome.defects.is_empty());
        assert!(outcome.analysis.proper_nesting);
        assert!(outcome.analysis.has_h1);
        assert!(outcome.analysis.recommendations.is_empty());
    }

    #[test]
    fn test_decreasing_levels_allowed() {
        let outcome = inspect(&snapshot_with_headings(&[1, 2, 3, 2, 3, 1]));
        assert!(outcome.defects.is_empty());
    }

    #[test]
    fn test_missing_h1_is_advisory_only() {
        let outcome = inspect(&snapshot_with_headings(&[2, 3]));
        assert!(outcome.defects.is_empty());
        assert!(!outcome.analysis.has_h1);
        assert!(outcome
            .analysis
            .recommendations
            .iter()
            .any(|r| r.contains("H1")));
    }

    #[test]
    fn test_empty_heading_defect() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.element(body, "h2", &[]);
        let outcome = inspect(&b.build());

        assert_eq!(outcome.defects.len(), 1);
        assert_eq!(outcome.defects[0].kind, DefectKind::HeadingEmpty);
        assert_eq!(outcome.analysis.structure[0].issues, vec!["Heading is empty"]);
    }

    #[test]
    fn test_long_heading_warning() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        let h = b.element(body, "h2", &[]);
        b.text(h, &"long heading ".repeat(20));
        let outcome = inspect(&b.build());

        assert_eq!(outcome.defects.len(), 1);
        assert_eq!(outcome.defects[0].kind, DefectKind::HeadingTooLong);
        assert_eq!(outcome.defects[0].severity, Severity::Minor);
    }

    #[test]
    fn test_heading_length_counts_characters_not_bytes() {
        // 60 CJK characters are 180 bytes but only 60 characters
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        let h = b.element(body, "h2", &[]);
        b.text(h, &"見".repeat(60));
        let outcome = inspect(&b.build());
        assert!(outcome.defects.is_empty());
    }
}
