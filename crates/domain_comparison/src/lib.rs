//! Quote Comparison Domain
//!
//! Builds the normalized, field-aligned comparison matrix over a set of
//! quote extraction records. Every function here is pure and synchronous:
//! no I/O, no shared state, outputs are a deterministic function of inputs
//! and safe to memoize by input identity.
//!
//! The matrix and the gap analysis (see `domain_gap`) are independent
//! views over the same input and may be computed concurrently.

pub mod comparator;
pub mod rows;

pub use comparator::{compare_values, BestWorst, ComparisonSemantics};
pub use rows::{
    build_comparison_rows, CellStatus, CellValue, ComparisonRow, ComparisonTable, RowCategory,
};
