//! Test Data Builders
//!
//! Provides builder patterns for constructing test extraction records with
//! sensible defaults. Tests specify only the fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::Money;
use domain_extraction::{
    CoverageItem, CoverageType, Endorsement, Exclusion, LimitBasis, PremiumBreakdown,
    QuoteExtraction,
};

/// Builder for quote extraction records
pub struct QuoteExtractionBuilder {
    extraction: QuoteExtraction,
}

impl Default for QuoteExtractionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteExtractionBuilder {
    /// Creates a builder with an empty record
    pub fn new() -> Self {
        Self {
            extraction: QuoteExtraction::new(),
        }
    }

    /// Sets the carrier name
    pub fn with_carrier(mut self, name: impl Into<String>) -> Self {
        self.extraction.carrier_name = Some(name.into());
        self
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.extraction.policy_number = Some(number.into());
        self
    }

    /// Sets the named insured
    pub fn with_named_insured(mut self, name: impl Into<String>) -> Self {
        self.extraction.named_insured = Some(name.into());
        self
    }

    /// Sets the policy period
    pub fn with_period(mut self, effective: NaiveDate, expiration: NaiveDate) -> Self {
        self.extraction.effective_date = Some(effective);
        self.extraction.expiration_date = Some(expiration);
        self
    }

    /// Sets the annual premium in USD
    pub fn with_annual_premium(mut self, amount: Decimal) -> Self {
        self.extraction.annual_premium = Some(Money::usd(amount));
        self
    }

    /// Adds a coverage with a USD limit
    pub fn with_coverage(mut self, coverage_type: CoverageType, limit: Decimal) -> Self {
        self.extraction
            .coverages
            .push(CoverageItem::new(coverage_type).with_limit(Money::usd(limit)));
        self
    }

    /// Adds a coverage with no stated limit
    pub fn with_unlimited_coverage(mut self, coverage_type: CoverageType) -> Self {
        self.extraction
            .coverages
            .push(CoverageItem::new(coverage_type));
        self
    }

    /// Adds a coverage with limit, basis, and deductible
    pub fn with_detailed_coverage(
        mut self,
        coverage_type: CoverageType,
        limit: Decimal,
        basis: LimitBasis,
        deductible: Decimal,
    ) -> Self {
        self.extraction.coverages.push(
            CoverageItem::new(coverage_type)
                .with_limit(Money::usd(limit))
                .with_basis(basis)
                .with_deductible(Money::usd(deductible)),
        );
        self
    }

    /// Adds an endorsement
    pub fn with_endorsement(mut self, form_number: &str, name: &str) -> Self {
        self.extraction
            .endorsements
            .push(Endorsement::new(form_number, name));
        self
    }

    /// Adds an exclusion by name
    pub fn with_exclusion(mut self, name: impl Into<String>) -> Self {
        self.extraction.exclusions.push(Exclusion {
            name: name.into(),
            description: None,
            applies_to: None,
            source_pages: Vec::new(),
        });
        self
    }

    /// Sets the premium breakdown
    pub fn with_premium_breakdown(mut self, breakdown: PremiumBreakdown) -> Self {
        self.extraction.premium_breakdown = Some(breakdown);
        self
    }

    /// Returns the built record
    pub fn build(self) -> QuoteExtraction {
        self.extraction
    }
}
