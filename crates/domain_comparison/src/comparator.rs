//! Domain-aware value comparison
//!
//! Selects a best and worst record index for a row of optional numeric
//! values. Absent values are excluded entirely, never treated as zero or
//! infinity. Fewer than two present values, or all present values equal,
//! means there is nothing to distinguish and neither index is set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Comparison semantics for a field
///
/// Coverage limits are higher-is-better; deductibles and premiums are
/// lower-is-better. Free-text and informational fields are not comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonSemantics {
    HigherIsBetter,
    LowerIsBetter,
    NotComparable,
}

/// Best and worst record indices for one comparison row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestWorst {
    pub best: Option<usize>,
    pub worst: Option<usize>,
}

impl BestWorst {
    /// Neither index set; nothing to distinguish
    pub fn none() -> Self {
        Self::default()
    }
}

/// Selects best and worst indices for a row of per-record values
///
/// Ties among the extreme value are broken by first occurrence: the
/// lowest index carrying the extreme wins.
pub fn compare_values(semantics: ComparisonSemantics, values: &[Option<Decimal>]) -> BestWorst {
    if semantics == ComparisonSemantics::NotComparable {
        return BestWorst::none();
    }

    let present: Vec<(usize, Decimal)> = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|value| (i, value)))
        .collect();

    if present.len() < 2 {
        return BestWorst::none();
    }

    let first = present[0].1;
    if present.iter().all(|(_, v)| *v == first) {
        return BestWorst::none();
    }

    // Strict comparisons keep the first occurrence on ties.
    let mut highest = present[0];
    let mut lowest = present[0];
    for &(index, value) in &present[1..] {
        if value > highest.1 {
            highest = (index, value);
        }
        if value < lowest.1 {
            lowest = (index, value);
        }
    }

    match semantics {
        ComparisonSemantics::HigherIsBetter => BestWorst {
            best: Some(highest.0),
            worst: Some(lowest.0),
        },
        ComparisonSemantics::LowerIsBetter => BestWorst {
            best: Some(lowest.0),
            worst: Some(highest.0),
        },
        ComparisonSemantics::NotComparable => unreachable!(),
    }
}
