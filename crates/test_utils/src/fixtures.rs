//! Common test fixtures
//!
//! Canonical records used across the integration suites, so scenario
//! tests agree on their baseline data.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use domain_extraction::{CoverageType, LimitBasis, QuoteExtraction};

use crate::builders::QuoteExtractionBuilder;

/// Fixed dates for policy periods
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
    }

    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date")
    }
}

/// Ready-made extraction records
pub struct ExtractionFixtures;

impl ExtractionFixtures {
    /// A well-rounded quote: GL at the recommended minimum, property,
    /// workers' comp, and the critical additional-insured endorsement
    pub fn strong_quote() -> QuoteExtraction {
        QuoteExtractionBuilder::new()
            .with_carrier("Hartford")
            .with_policy_number("BOP-2025-0001")
            .with_named_insured("Acme Manufacturing LLC")
            .with_period(TemporalFixtures::policy_start(), TemporalFixtures::policy_end())
            .with_annual_premium(dec!(48000))
            .with_detailed_coverage(
                CoverageType::GeneralLiability,
                dec!(1000000),
                LimitBasis::PerOccurrence,
                dec!(5000),
            )
            .with_coverage(CoverageType::Property, dec!(750000))
            .with_coverage(CoverageType::WorkersComp, dec!(1000000))
            .with_endorsement("CG 20 10", "Additional Insured - Owners, Lessees or Contractors")
            .build()
    }

    /// A thinner quote from another carrier: lower GL limit, no workers'
    /// comp, no endorsements, one extra exclusion
    pub fn weak_quote() -> QuoteExtraction {
        QuoteExtractionBuilder::new()
            .with_carrier("Travelers")
            .with_policy_number("CPP-88-44-21")
            .with_named_insured("Acme Manufacturing LLC")
            .with_period(TemporalFixtures::policy_start(), TemporalFixtures::policy_end())
            .with_annual_premium(dec!(41500))
            .with_detailed_coverage(
                CoverageType::GeneralLiability,
                dec!(500000),
                LimitBasis::PerOccurrence,
                dec!(10000),
            )
            .with_coverage(CoverageType::Property, dec!(750000))
            .with_exclusion("Asbestos Exclusion")
            .build()
    }

    /// The standard two-quote comparison pair
    pub fn two_quote_comparison() -> Vec<QuoteExtraction> {
        vec![Self::strong_quote(), Self::weak_quote()]
    }
}
