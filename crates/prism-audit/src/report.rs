//! Report Composer
//!
//! Pure transformation of an [`AuditResult`] into a Markdown report.
//! The compliance lines recompute PASS/FAIL from defect severities
//! independently of the scorer's classification; tests assert the two
//! agree.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::defect::Severity;
use crate::result::AuditResult;

/// Report schema version string
pub const REPORT_VERSION: &str = "2.0";

/// Composer options
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Generation timestamp; `None` reads the clock. Tests pass a
    /// fixed instant to keep report output deterministic.
    pub generated_at: Option<DateTime<Utc>>,
}

/// Render the Markdown report
pub fn compose_report(result: &AuditResult, options: &ReportOptions) -> String {
    let mut out = String::new();
    let generated_at = options.generated_at.unwrap_or_else(Utc::now);

    let _ = writeln!(out, "# Comprehensive Accessibility Report\n");

    let _ = writeln!(out, "## Executive Summary");
    let _ = writeln!(out, "- **Overall Score**: {}/100", result.score);
    let _ = writeln!(out, "- **WCAG Compliance Level**: {}", result.wcag_level);
    let _ = writeln!(
        out,
        "- **Total Elements Analyzed**: {}",
        result.summary.total_elements
    );
    let _ = writeln!(out, "- **Elements Tested**: {}\n", result.summary.tested_elements);

    let _ = writeln!(out, "## Critical Issues Found: {}\n", result.summary.defects);

    for defect in &result.defects {
        let _ = writeln!(
            out,
            "### {} - {} PRIORITY\n",
            defect.kind.as_str().to_uppercase(),
            defect.severity.as_str().to_uppercase()
        );
        let _ = writeln!(out, "**Issue**: {}\n", defect.description);
        let _ = writeln!(
            out,
            "**Impact**: {} - Affects {} element(s)\n",
            defect.severity.as_str(),
            defect.nodes.len()
        );
        let _ = writeln!(out, "**How to Fix**: {}\n", defect.how_to_fix);
        if !defect.code_example.is_empty() {
            let _ = writeln!(out, "**Code Example**:");
            let _ = writeln!(out, "```html\n{}\n```\n", defect.code_example);
        }
        let _ = writeln!(out, "**Affected Elements**:");
        for node in &defect.nodes {
            let _ = writeln!(out, "- {}: {}", node.locator, node.failure_summary);
        }
        let _ = writeln!(out, "\n**Learn More**: {}\n\n---\n", defect.help_url);
    }

    let _ = writeln!(out, "## Detailed Analysis\n");

    let _ = writeln!(out, "### Color Contrast Analysis");
    let contrast = &result.detailed_analysis.color_contrast;
    if contrast.is_empty() {
        let _ = writeln!(out, "No color contrast issues detected.");
    } else {
        for entry in contrast {
            let _ = writeln!(
                out,
                "- **{}**: {:.2}:1 ratio - {}",
                entry.element, entry.ratio, entry.recommendation
            );
        }
    }

    let headings = &result.detailed_analysis.heading_structure;
    let _ = writeln!(out, "\n### Heading Structure");
    let _ = writeln!(out, "- **Has H1**: {}", yes_no(headings.has_h1));
    let _ = writeln!(out, "- **Proper Nesting**: {}", yes_no(headings.proper_nesting));
    let _ = writeln!(
        out,
        "- **Recommendations**: {}",
        if headings.recommendations.is_empty() {
            "None".to_string()
        } else {
            headings.recommendations.join(", ")
        }
    );

    let forms = &result.detailed_analysis.form_analysis;
    let _ = writeln!(out, "\n### Form Accessibility");
    let _ = writeln!(out, "- **Total Forms**: {}", forms.total_forms);
    let _ = writeln!(out, "- **Forms with Labels**: {}", forms.forms_with_labels);
    let _ = writeln!(out, "- **Issues Found**: {}", forms.issues.len());

    let images = &result.detailed_analysis.image_analysis;
    let _ = writeln!(out, "\n### Image Accessibility");
    let _ = writeln!(out, "- **Total Images**: {}", images.total_images);
    let _ = writeln!(out, "- **Images with Alt Text**: {}", images.images_with_alt);
    let _ = writeln!(out, "- **Issues**: {}", images.issues.len());

    let keyboard = &result.detailed_analysis.keyboard_navigation;
    let _ = writeln!(out, "\n### Keyboard Navigation");
    let _ = writeln!(out, "- **Focusable Elements**: {}", keyboard.focusable_elements);
    let _ = writeln!(out, "- **Skip Links**: {}", keyboard.skip_links);
    let _ = writeln!(out, "- **Issues**: {}", keyboard.issues.len());

    let _ = writeln!(out, "\n## Recommendations Priority List\n");
    let _ = writeln!(out, "### High Priority (Fix Immediately)");
    write_tier(&mut out, result, |s| s == Severity::Critical);
    let _ = writeln!(out, "\n### Medium Priority (Fix Soon)");
    write_tier(&mut out, result, |s| s == Severity::Serious);
    let _ = writeln!(out, "\n### Low Priority (Improve When Possible)");
    write_tier(&mut out, result, |s| {
        s == Severity::Moderate || s == Severity::Minor
    });

    // Independent recomputation from severities; must agree with the
    // scorer's ordinal classification.
    let critical = count_at(result, Severity::Critical);
    let serious = count_at(result, Severity::Serious);
    let _ = writeln!(out, "\n## Compliance Status");
    let _ = writeln!(out, "- **WCAG 2.1 Level A**: {}", pass_fail(critical == 0));
    let _ = writeln!(
        out,
        "- **WCAG 2.1 Level AA**: {}",
        pass_fail(critical == 0 && serious == 0)
    );
    let _ = writeln!(
        out,
        "- **WCAG 2.1 Level AAA**: {}",
        pass_fail(result.defects.is_empty())
    );

    let _ = writeln!(
        out,
        "\nGenerated on: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Report Version: {REPORT_VERSION}");

    out
}

fn write_tier(out: &mut String, result: &AuditResult, filter: impl Fn(Severity) -> bool) {
    let mut any = false;
    for defect in result.defects.iter().filter(|d| filter(d.severity)) {
        let _ = writeln!(out, "- {}", defect.description);
        any = true;
    }
    if !any {
        let _ = writeln!(out, "None");
    }
}

fn count_at(result: &AuditResult, severity: Severity) -> usize {
    result
        .defects
        .iter()
        .filter(|d| d.severity == severity)
        .count()
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn pass_fail(pass: bool) -> &'static str {
    if pass { "PASS" } else { "FAIL" }
}
