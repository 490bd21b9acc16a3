//! Quote Extraction Domain
//!
//! Structured records produced from insurance quote documents by an
//! external extraction service. This crate defines the input contract for
//! the comparison and gap-analysis engines: plain serde records with no
//! behavior beyond classification and convenience accessors.
//!
//! Invariants carried by the types here:
//! - A coverage item always has a type; limits and deductibles may be
//!   absent, which means unknown rather than zero.
//! - Endorsement identity is decided by normalized form number, not by
//!   object identity.
//! - Records are immutable once handed to an engine; engines allocate
//!   fresh output and hold no references after returning.

pub mod coverage;
pub mod endorsement;
pub mod extraction;
pub mod premium;

pub use coverage::{CoverageItem, CoverageType, Deductible, Exclusion, LimitBasis};
pub use endorsement::{Endorsement, EndorsementType};
pub use extraction::{CarrierRating, DocumentSummary, PolicyMetadata, QuoteExtraction};
pub use premium::{CoveragePremium, PremiumBreakdown};
