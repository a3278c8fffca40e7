//! Audit Result
//!
//! Root aggregate returned by one audit invocation. Immutable once
//! returned; owned exclusively by the caller; no clock reads, so two
//! audits of one snapshot serialize identically.

use serde::Serialize;

use crate::analysis::DetailedAnalysis;
use crate::defect::{Defect, IncompleteRecord, PassRecord};
use crate::score::WcagLevel;

/// Summary counts for the executive view
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub defects: usize,
    pub passes: usize,
    pub incomplete: usize,
    pub score: u8,
    pub wcag_level: WcagLevel,
    pub total_elements: usize,
    pub tested_elements: usize,
}

/// The complete outcome of one audit
#[derive(Debug, Clone, Serialize)]
pub struct AuditResult {
    pub score: u8,
    pub wcag_level: WcagLevel,
    pub defects: Vec<Defect>,
    pub passes: Vec<PassRecord>,
    pub incomplete: Vec<IncompleteRecord>,
    pub summary: Summary,
    pub detailed_analysis: DetailedAnalysis,
}

impl AuditResult {
    /// JSON form of the result
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
