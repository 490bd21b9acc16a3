//! Risk scoring
//!
//! Converts detector findings into a single bounded score. Weights are
//! additive and the sum is clamped to [0, 100]: many findings mean "fully
//! high risk", never more.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coverage_gaps::MissingCoverageFinding;
use crate::endorsement_gaps::EndorsementGapFinding;
use crate::limits::LimitConcernFinding;
use crate::taxonomy::{CoverageImportance, EndorsementImportance};

const CRITICAL_COVERAGE_POINTS: u32 = 25;
const RECOMMENDED_COVERAGE_POINTS: u32 = 10;
const OPTIONAL_COVERAGE_POINTS: u32 = 5;
const LIMIT_CONCERN_POINTS: u32 = 15;
const CRITICAL_ENDORSEMENT_POINTS: u32 = 20;
const RECOMMENDED_ENDORSEMENT_POINTS: u32 = 5;

const MAX_SCORE: u32 = 100;

/// Three-level risk banding over the 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{label}")
    }
}

/// Sums the weighted findings and clamps to [0, 100]
pub fn calculate_risk_score(
    missing_coverages: &[MissingCoverageFinding],
    limit_concerns: &[LimitConcernFinding],
    endorsement_gaps: &[EndorsementGapFinding],
) -> u8 {
    let coverage_points: u32 = missing_coverages
        .iter()
        .map(|f| match f.importance {
            CoverageImportance::Critical => CRITICAL_COVERAGE_POINTS,
            CoverageImportance::Recommended => RECOMMENDED_COVERAGE_POINTS,
            CoverageImportance::Optional => OPTIONAL_COVERAGE_POINTS,
        })
        .sum();

    let limit_points = limit_concerns.len() as u32 * LIMIT_CONCERN_POINTS;

    let endorsement_points: u32 = endorsement_gaps
        .iter()
        .map(|f| match f.importance {
            EndorsementImportance::Critical => CRITICAL_ENDORSEMENT_POINTS,
            EndorsementImportance::Recommended => RECOMMENDED_ENDORSEMENT_POINTS,
        })
        .sum();

    let total = coverage_points + limit_points + endorsement_points;
    total.min(MAX_SCORE) as u8
}

/// Bands a score: low below 30, medium from 30, high from 60
///
/// Band lower bounds are inclusive; exactly 30 is medium and exactly 60
/// is high.
pub fn risk_level(score: u8) -> RiskLevel {
    match score {
        0..=29 => RiskLevel::Low,
        30..=59 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::taxonomy::CoverageImportance;
    use domain_extraction::CoverageType;
    use proptest::prelude::*;

    fn finding(importance: CoverageImportance) -> MissingCoverageFinding {
        MissingCoverageFinding {
            coverage_type: CoverageType::Property,
            label: "Property".to_string(),
            importance,
            present_in: Vec::new(),
        }
    }

    fn importance_strategy() -> impl Strategy<Value = CoverageImportance> {
        prop_oneof![
            Just(CoverageImportance::Critical),
            Just(CoverageImportance::Recommended),
            Just(CoverageImportance::Optional),
        ]
    }

    proptest! {
        #[test]
        fn score_is_always_within_bounds(importances in prop::collection::vec(importance_strategy(), 0..40)) {
            let findings: Vec<_> = importances.into_iter().map(finding).collect();
            let score = calculate_risk_score(&findings, &[], &[]);
            prop_assert!(score <= 100);
        }

        #[test]
        fn adding_a_critical_finding_never_decreases_score(
            importances in prop::collection::vec(importance_strategy(), 0..20)
        ) {
            let findings: Vec<_> = importances.into_iter().map(finding).collect();
            let base = calculate_risk_score(&findings, &[], &[]);

            let mut extended = findings;
            extended.push(finding(CoverageImportance::Critical));
            let grown = calculate_risk_score(&extended, &[], &[]);

            prop_assert!(grown >= base);
        }
    }
}
