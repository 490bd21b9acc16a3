//! Gap analysis orchestration
//!
//! Runs the three detectors against the same input and feeds their output
//! to the risk scorer. Pure composition: no state, no I/O, fresh output
//! per call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use domain_extraction::QuoteExtraction;

use crate::coverage_gaps::{detect_missing_coverages, MissingCoverageFinding};
use crate::endorsement_gaps::{detect_endorsement_gaps, EndorsementGapFinding};
use crate::limits::{detect_limit_concerns, LimitConcernFinding};
use crate::scoring::{calculate_risk_score, risk_level, RiskLevel};

/// The full gap analysis result for a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysis {
    pub missing_coverages: Vec<MissingCoverageFinding>,
    pub limit_concerns: Vec<LimitConcernFinding>,
    pub endorsement_gaps: Vec<EndorsementGapFinding>,
    /// Bounded 0-100 severity summary of all findings
    pub overall_risk_score: u8,
}

impl GapAnalysis {
    /// The three-level banding of the overall score
    pub fn risk_level(&self) -> RiskLevel {
        risk_level(self.overall_risk_score)
    }
}

/// Runs all gap detectors and scores the combined findings
///
/// Degenerate inputs are valid: zero records yield an empty analysis with
/// score 0; a single record can still raise limit concerns, but the
/// cross-record detectors necessarily return empty.
pub fn analyze_gaps(extractions: &[QuoteExtraction]) -> GapAnalysis {
    let missing_coverages = detect_missing_coverages(extractions);
    let limit_concerns = detect_limit_concerns(extractions);
    let endorsement_gaps = detect_endorsement_gaps(extractions);

    let overall_risk_score =
        calculate_risk_score(&missing_coverages, &limit_concerns, &endorsement_gaps);

    debug!(
        records = extractions.len(),
        missing_coverages = missing_coverages.len(),
        limit_concerns = limit_concerns.len(),
        endorsement_gaps = endorsement_gaps.len(),
        score = overall_risk_score,
        "gap analysis complete"
    );

    GapAnalysis {
        missing_coverages,
        limit_concerns,
        endorsement_gaps,
        overall_risk_score,
    }
}
