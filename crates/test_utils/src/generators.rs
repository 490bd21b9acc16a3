//! Random test data generators
//!
//! Produces plausible-but-random extraction records for determinism and
//! robustness tests. Uses `fake` for realistic carrier and insured names.

use fake::faker::company::en::CompanyName;
use fake::Fake;
use rust_decimal::Decimal;

use domain_extraction::{CoverageType, QuoteExtraction};

use crate::builders::QuoteExtractionBuilder;

/// Coverage types cycled through by the generator
const GENERATED_TYPES: [CoverageType; 5] = [
    CoverageType::GeneralLiability,
    CoverageType::Property,
    CoverageType::WorkersComp,
    CoverageType::Umbrella,
    CoverageType::Cyber,
];

/// Generates a record with `coverage_count` coverages and random names
///
/// Limits step by $250,000 so generated records exercise both sides of
/// the minimum-limit table.
pub fn random_extraction(coverage_count: usize) -> QuoteExtraction {
    let carrier: String = CompanyName().fake();
    let insured: String = CompanyName().fake();

    let mut builder = QuoteExtractionBuilder::new()
        .with_carrier(carrier)
        .with_named_insured(insured)
        .with_annual_premium(Decimal::new(40_000 + (coverage_count as i64) * 1_500, 0));

    for i in 0..coverage_count {
        let coverage_type = GENERATED_TYPES[i % GENERATED_TYPES.len()].clone();
        let limit = Decimal::new(250_000 * (i as i64 + 1), 0);
        builder = builder.with_coverage(coverage_type, limit);
    }

    builder.build()
}
