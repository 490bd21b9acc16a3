//! Shared test utilities for the quote comparison workspace
//!
//! Builders, fixtures, and generators used by the integration suites of
//! the domain crates. Not intended for production use.

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::QuoteExtractionBuilder;
pub use fixtures::{ExtractionFixtures, TemporalFixtures};
pub use generators::random_extraction;
