//! Missing-coverage detection
//!
//! A coverage gap is a coverage type present in at least one but not all
//! compared records. Requires two or more records; with fewer there is
//! nothing to compare against.

use serde::{Deserialize, Serialize};

use domain_extraction::{CoverageType, QuoteExtraction};

use crate::taxonomy::{coverage_importance, CoverageImportance};

/// A coverage type quoted by some carriers but not others
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingCoverageFinding {
    pub coverage_type: CoverageType,
    /// Human-readable coverage label
    pub label: String,
    pub importance: CoverageImportance,
    /// Labels of the records that do include the coverage
    pub present_in: Vec<String>,
}

/// Detects coverage types present in some but not all records
///
/// Findings are ordered critical first, then recommended, then optional;
/// within a tier, order follows first appearance across records.
pub fn detect_missing_coverages(extractions: &[QuoteExtraction]) -> Vec<MissingCoverageFinding> {
    if extractions.len() < 2 {
        return Vec::new();
    }

    let mut findings = Vec::new();
    for coverage_type in distinct_coverage_types(extractions) {
        let present_in: Vec<String> = extractions
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_coverage(&coverage_type))
            .map(|(i, e)| e.display_label(i))
            .collect();

        if !present_in.is_empty() && present_in.len() < extractions.len() {
            findings.push(MissingCoverageFinding {
                label: coverage_type.label(),
                importance: coverage_importance(&coverage_type),
                coverage_type,
                present_in,
            });
        }
    }

    // Stable sort keeps first-appearance order within each tier.
    findings.sort_by_key(|f| f.importance);
    findings
}

/// Distinct coverage types in first-appearance order across records
pub(crate) fn distinct_coverage_types(extractions: &[QuoteExtraction]) -> Vec<CoverageType> {
    let mut types = Vec::new();
    for extraction in extractions {
        for item in &extraction.coverages {
            if !types.contains(&item.coverage_type) {
                types.push(item.coverage_type.clone());
            }
        }
    }
    types
}
