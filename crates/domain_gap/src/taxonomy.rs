//! Fixed domain classification tables
//!
//! Immutable lookup data initialized once at process start: which coverage
//! types matter most, the minimum limits an agency should recommend, and
//! the endorsement forms considered critical. Detectors read these tables;
//! nothing writes them.

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use core_kernel::{FormNumber, Money};
use domain_extraction::CoverageType;

/// How important a coverage type is to a typical commercial insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageImportance {
    Critical,
    Recommended,
    Optional,
}

/// Importance of a missing endorsement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndorsementImportance {
    Critical,
    Recommended,
}

static CRITICAL_COVERAGE_TYPES: Lazy<HashSet<CoverageType>> = Lazy::new(|| {
    HashSet::from([
        CoverageType::GeneralLiability,
        CoverageType::Property,
        CoverageType::WorkersComp,
    ])
});

static RECOMMENDED_COVERAGE_TYPES: Lazy<HashSet<CoverageType>> = Lazy::new(|| {
    HashSet::from([
        CoverageType::Umbrella,
        CoverageType::ProfessionalLiability,
        CoverageType::CommercialAuto,
    ])
});

/// Minimum recommended limits per coverage type (USD)
static MINIMUM_RECOMMENDED_LIMITS: Lazy<HashMap<CoverageType, Money>> = Lazy::new(|| {
    HashMap::from([
        (CoverageType::GeneralLiability, Money::usd(dec!(1000000))),
        (CoverageType::Property, Money::usd(dec!(500000))),
        (CoverageType::WorkersComp, Money::usd(dec!(500000))),
        (CoverageType::Umbrella, Money::usd(dec!(1000000))),
        (CoverageType::ProfessionalLiability, Money::usd(dec!(1000000))),
        (CoverageType::Cyber, Money::usd(dec!(1000000))),
        (CoverageType::CommercialAuto, Money::usd(dec!(1000000))),
    ])
});

/// Endorsement forms an agency treats as critical when absent
///
/// Additional insured (ongoing and completed operations), primary and
/// noncontributory wording, and waiver of subrogation.
static CRITICAL_ENDORSEMENT_FORMS: Lazy<Vec<FormNumber>> = Lazy::new(|| {
    vec![
        FormNumber::new("CG 20 10"),
        FormNumber::new("CG 20 37"),
        FormNumber::new("CG 20 01"),
        FormNumber::new("CG 24 04"),
    ]
});

/// Classifies a coverage type's importance
///
/// Anything outside the critical/recommended tables, including
/// `CoverageType::Other`, defaults to optional; unrecognized input is
/// never rejected.
pub fn coverage_importance(coverage_type: &CoverageType) -> CoverageImportance {
    if CRITICAL_COVERAGE_TYPES.contains(coverage_type) {
        CoverageImportance::Critical
    } else if RECOMMENDED_COVERAGE_TYPES.contains(coverage_type) {
        CoverageImportance::Recommended
    } else {
        CoverageImportance::Optional
    }
}

/// The minimum recommended limit for a coverage type, if one is defined
pub fn minimum_recommended_limit(coverage_type: &CoverageType) -> Option<Money> {
    MINIMUM_RECOMMENDED_LIMITS.get(coverage_type).copied()
}

/// Classifies an endorsement form's importance
///
/// Membership in the critical table uses the fuzzy form-number matcher so
/// extraction spacing variants classify identically.
pub fn endorsement_importance(form_number: &FormNumber) -> EndorsementImportance {
    if CRITICAL_ENDORSEMENT_FORMS
        .iter()
        .any(|critical| critical.matches(form_number))
    {
        EndorsementImportance::Critical
    } else {
        EndorsementImportance::Recommended
    }
}
