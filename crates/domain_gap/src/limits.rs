//! Limit-adequacy detection
//!
//! Flags coverage limits that fall strictly below the fixed
//! minimum-recommended-limit table. Unlike the cross-record detectors
//! this runs meaningfully on a single extraction. Items with no stated
//! limit are skipped: unknown is not inadequate.

use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_extraction::{CoverageType, QuoteExtraction};

use crate::taxonomy::minimum_recommended_limit;

/// A coverage limit below the recommended minimum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitConcernFinding {
    pub coverage_type: CoverageType,
    /// Human-readable coverage label
    pub label: String,
    /// Label of the record carrying the low limit
    pub carrier: String,
    pub current_limit: Money,
    pub recommended_minimum: Money,
}

/// Detects limits strictly below the per-type recommended minimums
///
/// Findings are sorted by recommended minimum descending so the most
/// critical shortfalls surface first; ties keep first-appearance order.
pub fn detect_limit_concerns(extractions: &[QuoteExtraction]) -> Vec<LimitConcernFinding> {
    let mut findings = Vec::new();

    for (index, extraction) in extractions.iter().enumerate() {
        for item in &extraction.coverages {
            let Some(limit) = item.limit else {
                continue;
            };
            let Some(minimum) = minimum_recommended_limit(&item.coverage_type) else {
                continue;
            };
            if limit.amount() < minimum.amount() {
                findings.push(LimitConcernFinding {
                    coverage_type: item.coverage_type.clone(),
                    label: item.coverage_type.label(),
                    carrier: extraction.display_label(index),
                    current_limit: limit,
                    recommended_minimum: minimum,
                });
            }
        }
    }

    // Stable sort; descending by recommended minimum.
    findings.sort_by(|a, b| {
        b.recommended_minimum
            .amount()
            .cmp(&a.recommended_minimum.amount())
    });
    findings
}
