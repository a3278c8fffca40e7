//! Keyboard-Navigation Inspector
//!
//! Census of focusable elements, positive tabindex misuse, and skip
//! link presence. Positive tabindex is recorded as an issue and
//! deducted from the score, but never becomes a hard defect.

use prism_dom::{ElementData, Snapshot};

use crate::analysis::KeyboardAnalysis;

fn is_focusable(el: &ElementData) -> bool {
    match el.tag.as_str() {
        "a" => el.get_attr("href").is_some(),
        "button" | "input" | "textarea" | "select" | "details" => true,
        _ => parsed_tabindex(el).is_some_and(|t| t >= 0),
    }
}

fn parsed_tabindex(el: &ElementData) -> Option<i32> {
    el.get_attr("tabindex").and_then(|v| v.parse().ok())
}

pub fn inspect(snapshot: &Snapshot) -> KeyboardAnalysis {
    let mut analysis = KeyboardAnalysis::default();

    for (_, el) in snapshot.elements() {
        if is_focusable(el) {
            analysis.focusable_elements += 1;
        }
        if el.has_attr("tabindex") {
            analysis.elements_with_tabindex += 1;
            if parsed_tabindex(el).is_some_and(|t| t > 0) {
                analysis
                    .issues
                    .push("Avoid positive tabindex values as they can disrupt natural tab order"
                        .to_string());
            }
        }
        if el.tag == "a" && el.get_attr("href").is_some_and(|h| h.starts_with('#')) {
            analysis.skip_links += 1;
        }
    }

    if analysis.skip_links == 0 {
        analysis
            .recommendations
            .push("Add skip navigation links for keyboard users".to_string());
    }

    tracing::debug!(
        focusable = analysis.focusable_elements,
        issues = analysis.issues.len(),
        "keyboard inspection complete"
    );
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_dom::SnapshotBuilder;

    #[test]
    fn test_focusable_census() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.element(body, "a", &[("href", "/about")]);
        b.element(body, "a", &[]); // no href, not focusable
        b.element(body, "button", &[]);
        b.element(body, "input", &[("type", "text")]);
        b.element(body, "div", &[("tabindex", "0")]);
        b.element(body, "div", &[("tabindex", "-1")]); // removed from tab order
        let analysis = inspect(&b.build());

        assert_eq!(analysis.focusable_elements, 4);
        assert_eq!(analysis.elements_with_tabindex, 2);
    }

    #[test]
    fn test_positive_tabindex_is_issue_per_element() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.element(body, "button", &[("tabindex", "1")]);
        b.element(body, "button", &[("tabindex", "2")]);
        let analysis = inspect(&b.build());

        assert_eq!(analysis.issues.len(), 2);
    }

    #[test]
    fn test_skip_link_detection() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.element(body, "a", &[("href", "#main")]);
        let analysis = inspect(&b.build());

        assert_eq!(analysis.skip_links, 1);
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_missing_skip_link_recommendation() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        b.element(body, "a", &[("href", "/home")]);
        let analysis = inspect(&b.build());

        assert_eq!(analysis.skip_links, 0);
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.contains("skip navigation")));
    }
}
