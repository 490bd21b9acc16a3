//! Core Kernel - Foundational types and utilities for the quote comparison engine
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and noisy-string parsing
//! - Form number identifiers with fuzzy matching for extraction noise
//! - Common identifiers and value objects

pub mod form_number;
pub mod identifiers;
pub mod money;

pub use form_number::{normalize_identifier, FormNumber};
pub use identifiers::{DocumentId, ExtractionId};
pub use money::{Currency, Money, MoneyError};
