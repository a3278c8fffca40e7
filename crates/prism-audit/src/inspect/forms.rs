//! Form Inspector
//!
//! Label association for labelable controls, accessible text on
//! buttons, and grouping advisories for large forms.

use prism_dom::{ElementData, NodeId, Snapshot};

use crate::analysis::{FormAnalysis, FormIssue};
use crate::defect::{Defect, DefectKind, DefectNode, Severity};
use crate::inspect::render_snippet;

/// Controls beyond this count want a grouping container
const GROUPING_THRESHOLD: usize = 5;

#[derive(Debug, Default)]
pub struct FormOutcome {
    pub defects: Vec<Defect>,
    pub analysis: FormAnalysis,
}

fn is_labelable(el: &ElementData) -> bool {
    match el.tag.as_str() {
        "textarea" | "select" => true,
        "input" => !matches!(
            el.get_attr("type"),
            Some("hidden") | Some("submit") | Some("button") | Some("reset")
        ),
        _ => false,
    }
}

fn is_button_control(el: &ElementData) -> bool {
    el.tag == "button"
        || (el.tag == "input"
            && matches!(el.get_attr("type"), Some("submit") | Some("button") | Some("reset")))
}

/// A control is labeled if a label references its id, or it carries an
/// accessible-name attribute, or aria-labelledby resolves to an
/// existing node with text.
fn has_label(snapshot: &Snapshot, el: &ElementData) -> bool {
    if el.get_attr("aria-label").is_some_and(|v| !v.is_empty()) {
        return true;
    }

    if let Some(refs) = el.get_attr("aria-labelledby") {
        let resolved = refs.split_whitespace().any(|target| {
            snapshot
                .element_by_id(target)
                .map(|(id, _)| !snapshot.text_content(id).is_empty())
                .unwrap_or(false)
        });
        if resolved {
            return true;
        }
    }

    if let Some(id_attr) = el.get_attr("id") {
        if !id_attr.is_empty() {
            return snapshot
                .elements_by_tag("label")
                .any(|(_, label)| label.get_attr("for") == Some(id_attr));
        }
    }

    false
}

fn button_text(snapshot: &Snapshot, id: NodeId, el: &ElementData) -> bool {
    if el.get_attr("value").is_some_and(|v| !v.trim().is_empty()) {
        return true;
    }
    if el.get_attr("aria-label").is_some_and(|v| !v.trim().is_empty()) {
        return true;
    }
    !snapshot.text_content(id).is_empty()
}

pub fn inspect(snapshot: &Snapshot) -> FormOutcome {
    let mut outcome = FormOutcome::default();

    for (form_id, _) in snapshot.elements_by_tag("form") {
        outcome.analysis.total_forms += 1;
        let descendants = snapshot.descendants(form_id);

        let mut controls = 0;
        let mut labels = 0;
        let mut fieldsets = 0;
        for id in &descendants {
            let Some(el) = snapshot.get(*id).and_then(|n| n.as_element()) else { continue };
            match el.tag.as_str() {
                "label" => labels += 1,
                "fieldset" => fieldsets += 1,
                _ if is_labelable(el) => controls += 1,
                _ => {}
            }
        }

        if labels >= controls && controls > 0 {
            outcome.analysis.forms_with_labels += 1;
        }
        if fieldsets > 0 {
            outcome.analysis.forms_with_fieldsets += 1;
        }
        if controls > GROUPING_THRESHOLD && fieldsets == 0 {
            outcome.analysis.issues.push(FormIssue {
                kind: "fieldset".to_string(),
                locator: snapshot.locator(form_id).unwrap_or_default().to_string(),
                description: "Large forms should use fieldsets to group related fields"
                    .to_string(),
                fix: "Add <fieldset> and <legend> elements to group related form fields"
                    .to_string(),
            });
        }
    }

    for (id, el) in snapshot.elements() {
        if is_labelable(el) {
            if has_label(snapshot, el) {
                outcome.analysis.labeled_controls += 1;
            } else {
                outcome.defects.push(Defect::new(
                    DefectKind::LabelMissing,
                    Severity::Critical,
                    "Form elements must have labels",
                    "Ensure every form element has a label",
                    "https://dequeuniversity.com/rules/axe/4.7/label",
                    DefectNode {
                        html: render_snippet(el),
                        locator: snapshot.locator(id).unwrap_or_default().to_string(),
                        failure_summary: "Form element does not have an associated label"
                            .to_string(),
                    },
                ));
            }
        } else if is_button_control(el) && !button_text(snapshot, id, el) {
            let locator = snapshot.locator(id).unwrap_or_default().to_string();
            outcome.analysis.issues.push(FormIssue {
                kind: DefectKind::LabelMissing.as_str().to_string(),
                locator: locator.clone(),
                description: "Buttons must have accessible text".to_string(),
                fix: "Add descriptive text or value attribute to buttons".to_string(),
            });
            outcome.defects.push(Defect::new(
                DefectKind::LabelMissing,
                Severity::Serious,
                "Buttons must have accessible text",
                "Ensure buttons have discernible text",
                "https://dequeuniversity.com/rules/axe/4.7/button-name",
                DefectNode {
                    html: render_snippet(el),
                    locator,
                    failure_summary: "Button has no value, text content or aria-label".to_string(),
                },
            ));
        }
    }

    tracing::debug!(
        forms = outcome.analysis.total_forms,
        defects = outcome.defects.len(),
        "form inspection complete"
    );
    outcome
}
