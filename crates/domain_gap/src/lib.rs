//! Gap Analysis Domain
//!
//! Cross-record gap detection and risk scoring over quote extraction
//! records: missing coverages, inadequate limits, missing endorsements,
//! and a weighted, capped 0-100 risk score.
//!
//! All functions are pure and synchronous. Every call reads only its
//! arguments and the fixed taxonomy tables and returns freshly allocated
//! findings, so concurrent callers need no coordination. The engine is
//! total over degenerate input: empty and single-record inputs produce
//! empty-but-valid results rather than errors.

pub mod analysis;
pub mod coverage_gaps;
pub mod endorsement_gaps;
pub mod limits;
pub mod scoring;
pub mod taxonomy;

pub use analysis::{analyze_gaps, GapAnalysis};
pub use coverage_gaps::{detect_missing_coverages, MissingCoverageFinding};
pub use endorsement_gaps::{detect_endorsement_gaps, EndorsementGapFinding};
pub use limits::{detect_limit_concerns, LimitConcernFinding};
pub use scoring::{calculate_risk_score, risk_level, RiskLevel};
pub use taxonomy::{
    coverage_importance, endorsement_importance, minimum_recommended_limit, CoverageImportance,
    EndorsementImportance,
};
