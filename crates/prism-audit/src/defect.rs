//! Defect Taxonomy
//!
//! Value objects for audit findings: defects with severity and
//! remediation, pass records, and incomplete records. Produced fresh
//! each audit, never mutated.

use serde::{Serialize, Serializer};

/// Defect severity (ordered: Minor < Moderate < Serious < Critical)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Moderate,
    Serious,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Serious => "serious",
            Self::Critical => "critical",
        }
    }

    /// Parse an external impact vocabulary value.
    ///
    /// Unknown values map to Minor, the weight an unrecognized impact
    /// carries in scoring.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "critical" => Self::Critical,
            "serious" => Self::Serious,
            "moderate" => Self::Moderate,
            _ => Self::Minor,
        }
    }
}

/// Defect kind (fixed taxonomy)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefectKind {
    MissingAlt,
    AltTooLong,
    AltRedundantPhrase,
    InsufficientContrast,
    HeadingSkip,
    HeadingEmpty,
    HeadingTooLong,
    LabelMissing,
    PositiveTabindex,
    /// Normalized external rule outside the fixed taxonomy
    Other(String),
}

impl DefectKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::MissingAlt => "missing-alt",
            Self::AltTooLong => "alt-too-long",
            Self::AltRedundantPhrase => "alt-redundant-phrase",
            Self::InsufficientContrast => "insufficient-contrast",
            Self::HeadingSkip => "heading-skip",
            Self::HeadingEmpty => "heading-empty",
            Self::HeadingTooLong => "heading-too-long",
            Self::LabelMissing => "label-missing",
            Self::PositiveTabindex => "positive-tabindex",
            Self::Other(id) => id,
        }
    }

    /// Normalize an external rule identifier into the taxonomy
    pub fn from_rule_id(id: &str) -> Self {
        match id {
            "missing-alt" | "image-alt" => Self::MissingAlt,
            "alt-too-long" => Self::AltTooLong,
            "alt-redundant-phrase" => Self::AltRedundantPhrase,
            "insufficient-contrast" | "color-contrast" => Self::InsufficientContrast,
            "heading-skip" | "heading-order" => Self::HeadingSkip,
            "heading-empty" => Self::HeadingEmpty,
            "heading-too-long" => Self::HeadingTooLong,
            "label-missing" | "label" => Self::LabelMissing,
            "positive-tabindex" | "tabindex" => Self::PositiveTabindex,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for DefectKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One affected node within a defect
#[derive(Debug, Clone, Serialize)]
pub struct DefectNode {
    /// Markup snippet for display
    pub html: String,
    /// Stable locator within the snapshot
    pub locator: String,
    /// Why this node failed the rule
    pub failure_summary: String,
}

/// A discrete, classified accessibility nonconformance
#[derive(Debug, Clone, Serialize)]
pub struct Defect {
    pub kind: DefectKind,
    pub severity: Severity,
    pub description: String,
    pub help: String,
    pub help_url: String,
    pub how_to_fix: String,
    pub code_example: String,
    pub nodes: Vec<DefectNode>,
}

impl Defect {
    /// New defect with remediation guidance filled in from the lookup
    pub fn new(
        kind: DefectKind,
        severity: Severity,
        description: &str,
        help: &str,
        help_url: &str,
        node: DefectNode,
    ) -> Self {
        let remediation = Remediation::lookup(&kind);
        Self {
            kind,
            severity,
            description: description.to_string(),
            help: help.to_string(),
            help_url: help_url.to_string(),
            how_to_fix: remediation.how_to_fix.to_string(),
            code_example: remediation.code_example.to_string(),
            nodes: vec![node],
        }
    }
}

/// Rule that succeeded, with the number of compliant nodes
#[derive(Debug, Clone, Serialize)]
pub struct PassRecord {
    pub rule: String,
    pub description: String,
    pub nodes: usize,
}

/// Rule that needs manual judgment
#[derive(Debug, Clone, Serialize)]
pub struct IncompleteRecord {
    pub rule: String,
    pub description: String,
    pub nodes: usize,
    pub reason: String,
}

/// Remediation guidance, keyed by defect kind
pub struct Remediation {
    pub how_to_fix: &'static str,
    pub code_example: &'static str,
}

impl Remediation {
    /// Guidance for a defect kind. Never fails: unknown kinds fall
    /// back to the generic review instruction.
    pub fn lookup(kind: &DefectKind) -> Remediation {
        match kind {
            DefectKind::MissingAlt => Remediation {
                how_to_fix: "Add descriptive alt text to images. Use alt=\"\" for decorative images.",
                code_example: "<!-- Good -->\n<img src=\"chart.png\" alt=\"Sales increased 25% from Q1 to Q2\">\n<img src=\"decoration.png\" alt=\"\" role=\"presentation\">",
            },
            DefectKind::AltTooLong => Remediation {
                how_to_fix: "Keep alt text under 150 characters. Use surrounding text for detailed descriptions.",
                code_example: "<!-- Good -->\n<img src=\"chart.png\" alt=\"Quarterly sales chart\">\n<p>Sales rose steadily from January through March, peaking at...</p>",
            },
            DefectKind::AltRedundantPhrase => Remediation {
                how_to_fix: "Remove phrases like \"image of\" or \"picture of\" from alt text; screen readers already announce the element as an image.",
                code_example: "<!-- Bad -->\n<img src=\"team.jpg\" alt=\"Image of our team\">\n\n<!-- Good -->\n<img src=\"team.jpg\" alt=\"Our team at the 2024 offsite\">",
            },
            DefectKind::InsufficientContrast => Remediation {
                how_to_fix: "Increase color contrast to at least 4.5:1 for normal text and 3:1 for large text.",
                code_example: "/* Bad */\n.text { color: #999; background: #fff; } /* 2.8:1 */\n\n/* Good */\n.text { color: #666; background: #fff; } /* 5.7:1 */",
            },
            DefectKind::HeadingSkip => Remediation {
                how_to_fix: "Use headings in logical order (h1, h2, h3) without skipping levels.",
                code_example: "<!-- Good -->\n<h1>Main Title</h1>\n<h2>Section Title</h2>\n<h3>Subsection Title</h3>",
            },
            DefectKind::HeadingEmpty => Remediation {
                how_to_fix: "Give every heading visible text; remove headings used purely for spacing.",
                code_example: "<!-- Bad -->\n<h2></h2>\n\n<!-- Good -->\n<h2>Pricing</h2>",
            },
            DefectKind::HeadingTooLong => Remediation {
                how_to_fix: "Keep headings short and scannable; move detail into body text.",
                code_example: "<!-- Good -->\n<h2>Shipping options</h2>\n<p>We offer standard, express and same-day delivery...</p>",
            },
            DefectKind::LabelMissing => Remediation {
                how_to_fix: "Associate form controls with labels using for/id attributes or aria-label.",
                code_example: "<!-- Good -->\n<label for=\"email\">Email Address</label>\n<input type=\"email\" id=\"email\" name=\"email\">\n\n<!-- Alternative -->\n<input type=\"email\" aria-label=\"Email Address\">",
            },
            DefectKind::PositiveTabindex => Remediation {
                how_to_fix: "Remove positive tabindex values; rely on DOM order and tabindex=\"0\" so the tab sequence matches the visual order.",
                code_example: "<!-- Bad -->\n<button tabindex=\"3\">Save</button>\n\n<!-- Good -->\n<button>Save</button>",
            },
            DefectKind::Other(_) => Remediation {
                how_to_fix: "Review the element against WCAG conformance guidelines and ensure it meets accessibility standards.",
                code_example: "<!-- Refer to WCAG guidelines for specific implementation -->",
            },
        }
    }
}
