//! Image Inspector
//!
//! Alt-text policy: missing alternatives are critical, decorative
//! images are fine, over-long or boilerplate alt text is a minor
//! defect.

use prism_dom::Snapshot;

use crate::analysis::{ImageAnalysis, ImageIssue};
use crate::defect::{Defect, DefectKind, DefectNode, Severity};
use crate::inspect::render_snippet;

/// Alt text beyond this length gets flagged
const MAX_ALT_LENGTH: usize = 150;

const REDUNDANT_PHRASES: &[&str] = &["image of", "picture of"];

#[derive(Debug, Default)]
pub struct ImageOutcome {
    pub defects: Vec<Defect>,
    pub analysis: ImageAnalysis,
}

pub fn inspect(snapshot: &Snapshot) -> ImageOutcome {
    let mut outcome = ImageOutcome::default();

    for (id, el) in snapshot.elements_by_tag("img") {
        outcome.analysis.total_images += 1;
        let src = el.get_attr("src").unwrap_or("unknown").to_string();
        let locator = snapshot.locator(id).unwrap_or_default().to_string();
        let alt = el.get_attr("alt");
        let aria_label = el.get_attr("aria-label").filter(|v| !v.is_empty());
        let role = el.get_attr("role");

        if alt.is_some() {
            outcome.analysis.images_with_alt += 1;
        }

        let decorative =
            alt == Some("") || matches!(role, Some("presentation") | Some("none"));

        if alt.is_none() && aria_label.is_none() {
            outcome.analysis.issues.push(ImageIssue {
                src: src.clone(),
                locator: locator.clone(),
                kind: DefectKind::MissingAlt,
                issue: "Missing alt attribute".to_string(),
                fix: "Add alt=\"\" for decorative images or descriptive alt text for informative images".to_string(),
            });
            outcome.defects.push(Defect::new(
                DefectKind::MissingAlt,
                Severity::Critical,
                "Images must have alternate text",
                "Ensure img elements have alternate text or a role of none or presentation",
                "https://dequeuniversity.com/rules/axe/4.7/image-alt",
                DefectNode {
                    html: render_snippet(el),
                    locator,
                    failure_summary: "Element does not have an alt attribute".to_string(),
                },
            ));
            continue;
        }

        if decorative {
            outcome.analysis.decorative_images += 1;
            continue;
        }

        let Some(alt) = alt.or(aria_label) else { continue };

        // Character count, not bytes; non-ASCII alt text must not
        // over-count.
        let alt_chars = alt.chars().count();
        if alt_chars > MAX_ALT_LENGTH {
            outcome.analysis.issues.push(ImageIssue {
                src: src.clone(),
                locator: locator.clone(),
                kind: DefectKind::AltTooLong,
                issue: "Alt text is too long".to_string(),
                fix: "Keep alt text under 150 characters. Use surrounding text for detailed descriptions".to_string(),
            });
            outcome.defects.push(Defect::new(
                DefectKind::AltTooLong,
                Severity::Minor,
                "Alt text should be concise",
                "Keep alternative text short; long descriptions belong in surrounding content",
                "https://dequeuniversity.com/rules/axe/4.7/image-alt",
                DefectNode {
                    html: render_snippet(el),
                    locator: locator.clone(),
                    failure_summary: format!(
                        "Alt text is {alt_chars} characters; keep it under {MAX_ALT_LENGTH}"
                    ),
                },
            ));
        }

        let lower = alt.to_lowercase();
        if REDUNDANT_PHRASES.iter().any(|p| lower.contains(p)) {
            outcome.analysis.issues.push(ImageIssue {
                src,
                locator: locator.clone(),
                kind: DefectKind::AltRedundantPhrase,
                issue: "Alt text contains redundant phrases".to_string(),
                fix: "Remove phrases like \"image of\" or \"picture of\" from alt text".to_string(),
            });
            outcome.defects.push(Defect::new(
                DefectKind::AltRedundantPhrase,
                Severity::Minor,
                "Alt text should not restate that it describes an image",
                "Screen readers already announce img elements; boilerplate phrases waste the listener's time",
                "https://dequeuniversity.com/rules/axe/4.7/image-alt",
                DefectNode {
                    html: render_snippet(el),
                    locator,
                    failure_summary: "Alt text contains a redundant phrase such as \"image of\""
                        .to_string(),
                },
            ));
        }
    }

    tracing::debug!(
        total = outcome.analysis.total_images,
        defects = outcome.defects.len(),
        "image inspection complete"
    );
    outcome
}
