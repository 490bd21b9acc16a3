//! The quote extraction record
//!
//! One `QuoteExtraction` is produced per source document by an external
//! extraction service. The comparison and gap engines treat these records
//! as immutable input and never mutate them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coverage::{CoverageItem, CoverageType, Deductible, Exclusion};
use crate::endorsement::Endorsement;
use crate::premium::PremiumBreakdown;
use core_kernel::{DocumentId, ExtractionId, Money};

/// Carrier financial rating info, when the quote states it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierRating {
    /// A.M. Best rating, e.g. "A+"
    pub am_best_rating: Option<String>,
    /// A.M. Best financial size category, e.g. "XV"
    pub financial_size: Option<String>,
}

/// Quote-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyMetadata {
    /// Date the quote was issued
    pub quote_date: Option<NaiveDate>,
    /// Date the quote expires
    pub quote_expiration: Option<NaiveDate>,
    /// Underwriter name
    pub underwriter: Option<String>,
    /// Whether the placement is admitted or surplus lines
    pub admitted: Option<bool>,
}

/// A document reference paired with extractions for header fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: DocumentId,
    pub filename: String,
}

/// Structured representation of one insurance quote document
///
/// Every field except the identifier is optional or may be empty:
/// extraction quality varies by document, and absence always means
/// "not found", never a default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteExtraction {
    pub id: ExtractionId,
    /// The uploaded document this record was extracted from
    pub document_id: Option<DocumentId>,
    pub carrier_name: Option<String>,
    pub policy_number: Option<String>,
    pub named_insured: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub annual_premium: Option<Money>,
    #[serde(default)]
    pub coverages: Vec<CoverageItem>,
    #[serde(default)]
    pub exclusions: Vec<Exclusion>,
    #[serde(default)]
    pub deductibles: Vec<Deductible>,
    #[serde(default)]
    pub endorsements: Vec<Endorsement>,
    pub premium_breakdown: Option<PremiumBreakdown>,
    pub carrier_rating: Option<CarrierRating>,
    pub policy_metadata: Option<PolicyMetadata>,
}

impl QuoteExtraction {
    /// Creates an empty extraction record with a fresh identifier
    pub fn new() -> Self {
        Self {
            id: ExtractionId::new_v7(),
            document_id: None,
            carrier_name: None,
            policy_number: None,
            named_insured: None,
            effective_date: None,
            expiration_date: None,
            annual_premium: None,
            coverages: Vec::new(),
            exclusions: Vec::new(),
            deductibles: Vec::new(),
            endorsements: Vec::new(),
            premium_breakdown: None,
            carrier_rating: None,
            policy_metadata: None,
        }
    }

    /// Display label for this record in findings and headers
    ///
    /// Carrier name when present, else `"Quote N"` with `index` 0-based
    /// (labels are 1-based for readers).
    pub fn display_label(&self, index: usize) -> String {
        match &self.carrier_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Quote {}", index + 1),
        }
    }

    /// First coverage item of the given type, if any
    pub fn coverage_of_type(&self, coverage_type: &CoverageType) -> Option<&CoverageItem> {
        self.coverages
            .iter()
            .find(|item| &item.coverage_type == coverage_type)
    }

    /// Returns true if any coverage item carries the given type
    pub fn has_coverage(&self, coverage_type: &CoverageType) -> bool {
        self.coverage_of_type(coverage_type).is_some()
    }

    /// Total premium: the breakdown's stated total, else the top-level
    /// annual premium
    pub fn total_premium(&self) -> Option<Money> {
        match &self.premium_breakdown {
            Some(breakdown) => breakdown.effective_total(self.annual_premium),
            None => self.annual_premium,
        }
    }
}

impl Default for QuoteExtraction {
    fn default() -> Self {
        Self::new()
    }
}
