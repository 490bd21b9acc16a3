//! Comparison matrix construction
//!
//! Consumes the extraction records for a comparison and produces an
//! ordered, categorized set of rows, one per field/coverage/exclusion,
//! each annotated with best/worst indices and gap/conflict flags. Rows
//! are built fresh on every call and never cached.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{normalize_identifier, Money};
use domain_extraction::{CoverageType, DocumentSummary, LimitBasis, QuoteExtraction};

use crate::comparator::{compare_values, BestWorst, ComparisonSemantics};

/// Placeholder shown in cells whose field was not found in the record
const NOT_FOUND: &str = "—";
/// Placeholder for coverage rows where the record lacks the coverage
const NOT_COVERED: &str = "Not covered";
/// Display for a coverage present without a stated limit
const INCLUDED: &str = "Included";
/// Display for an exclusion present in a record
const EXCLUDED: &str = "Excluded";

/// Row category, emitted in this fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowCategory {
    Basic,
    Coverage,
    Exclusion,
    Summary,
}

/// Whether the field was found in a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    Found,
    NotFound,
}

/// One cell of the comparison matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellValue {
    pub display: String,
    pub status: CellStatus,
}

impl CellValue {
    fn found(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            status: CellStatus::Found,
        }
    }

    fn not_found(placeholder: &str) -> Self {
        Self {
            display: placeholder.to_string(),
            status: CellStatus::NotFound,
        }
    }
}

/// A single row of the comparison matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    /// Stable row identifier, e.g. `"coverage.general-liability"`
    pub id: String,
    /// Display label
    pub label: String,
    pub category: RowCategory,
    /// One cell per input record, in record order
    pub cells: Vec<CellValue>,
    /// True when the normalized cell values are not all identical
    pub has_difference: bool,
    pub best_index: Option<usize>,
    pub worst_index: Option<usize>,
    /// Feature present in at least one but not all records
    pub is_gap: bool,
    /// Feature present in all records with materially different terms
    pub is_conflict: bool,
    /// Indented breakdown row under a coverage row
    pub is_sub_row: bool,
}

/// The comparison matrix: one header per record, rows in category order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTable {
    pub headers: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

/// Normalized cell content used for difference detection
///
/// Display strings vary with formatting; differences are decided on the
/// normalized value instead.
#[derive(Debug, Clone, PartialEq)]
enum CellKey {
    Missing,
    Number(Decimal),
    Text(String),
}

struct RowInput {
    key: CellKey,
    cell: CellValue,
    /// Numeric value fed to the comparator, when the field is numeric
    comparable: Option<Decimal>,
}

impl RowInput {
    fn missing(placeholder: &str) -> Self {
        Self {
            key: CellKey::Missing,
            cell: CellValue::not_found(placeholder),
            comparable: None,
        }
    }

    fn text(value: &str) -> Self {
        Self {
            key: CellKey::Text(normalize_identifier(value)),
            cell: CellValue::found(value),
            comparable: None,
        }
    }

    fn date(value: NaiveDate) -> Self {
        Self {
            key: CellKey::Text(value.to_string()),
            cell: CellValue::found(value.format("%m/%d/%Y").to_string()),
            comparable: None,
        }
    }

    fn money(value: Money) -> Self {
        Self {
            key: CellKey::Number(value.amount()),
            cell: CellValue::found(value.format_grouped()),
            comparable: Some(value.amount()),
        }
    }

    fn count(value: usize) -> Self {
        Self {
            key: CellKey::Number(Decimal::from(value as u64)),
            cell: CellValue::found(value.to_string()),
            comparable: None,
        }
    }

    fn marker(display: &str) -> Self {
        Self {
            key: CellKey::Text(normalize_identifier(display)),
            cell: CellValue::found(display),
            comparable: None,
        }
    }
}

fn assemble_row(
    id: impl Into<String>,
    label: impl Into<String>,
    category: RowCategory,
    semantics: ComparisonSemantics,
    inputs: Vec<RowInput>,
) -> ComparisonRow {
    let comparables: Vec<Option<Decimal>> = inputs.iter().map(|i| i.comparable).collect();
    let BestWorst { best, worst } = compare_values(semantics, &comparables);

    let has_difference = inputs
        .windows(2)
        .any(|pair| pair[0].key != pair[1].key);

    ComparisonRow {
        id: id.into(),
        label: label.into(),
        category,
        cells: inputs.into_iter().map(|i| i.cell).collect(),
        has_difference,
        best_index: best,
        worst_index: worst,
        is_gap: false,
        is_conflict: false,
        is_sub_row: false,
    }
}

/// Builds the field-aligned comparison matrix for a set of extractions
///
/// `summaries`, when provided, pairs with `extractions` by position and
/// supplies a filename header fallback for records without a carrier
/// name. Inputs are read-only; the returned table is freshly allocated.
pub fn build_comparison_rows(
    extractions: &[QuoteExtraction],
    summaries: Option<&[DocumentSummary]>,
) -> ComparisonTable {
    if extractions.is_empty() {
        return ComparisonTable {
            headers: Vec::new(),
            rows: Vec::new(),
        };
    }

    let headers = build_headers(extractions, summaries);

    let mut rows = Vec::new();
    rows.extend(basic_rows(extractions));
    rows.extend(coverage_rows(extractions));
    rows.extend(exclusion_rows(extractions));
    rows.extend(summary_rows(extractions));

    debug!(
        records = extractions.len(),
        rows = rows.len(),
        "built comparison matrix"
    );

    ComparisonTable { headers, rows }
}

fn build_headers(
    extractions: &[QuoteExtraction],
    summaries: Option<&[DocumentSummary]>,
) -> Vec<String> {
    extractions
        .iter()
        .enumerate()
        .map(|(i, extraction)| {
            if let Some(name) = &extraction.carrier_name {
                if !name.trim().is_empty() {
                    return name.clone();
                }
            }
            if let Some(summary) = summaries.and_then(|s| s.get(i)) {
                return summary.filename.clone();
            }
            format!("Quote {}", i + 1)
        })
        .collect()
}

fn basic_rows(extractions: &[QuoteExtraction]) -> Vec<ComparisonRow> {
    let text_field = |id: &str, label: &str, get: fn(&QuoteExtraction) -> Option<&String>| {
        let inputs = extractions
            .iter()
            .map(|e| match get(e) {
                Some(value) if !value.trim().is_empty() => RowInput::text(value),
                _ => RowInput::missing(NOT_FOUND),
            })
            .collect();
        assemble_row(id, label, RowCategory::Basic, ComparisonSemantics::NotComparable, inputs)
    };

    let date_field = |id: &str, label: &str, get: fn(&QuoteExtraction) -> Option<NaiveDate>| {
        let inputs = extractions
            .iter()
            .map(|e| match get(e) {
                Some(date) => RowInput::date(date),
                None => RowInput::missing(NOT_FOUND),
            })
            .collect();
        assemble_row(id, label, RowCategory::Basic, ComparisonSemantics::NotComparable, inputs)
    };

    let premium_inputs = extractions
        .iter()
        .map(|e| match e.annual_premium {
            Some(premium) => RowInput::money(premium),
            None => RowInput::missing(NOT_FOUND),
        })
        .collect();

    vec![
        text_field("basic.policy-number", "Policy Number", |e| e.policy_number.as_ref()),
        text_field("basic.named-insured", "Named Insured", |e| e.named_insured.as_ref()),
        date_field("basic.effective-date", "Effective Date", |e| e.effective_date),
        date_field("basic.expiration-date", "Expiration Date", |e| e.expiration_date),
        assemble_row(
            "basic.annual-premium",
            "Annual Premium",
            RowCategory::Basic,
            ComparisonSemantics::LowerIsBetter,
            premium_inputs,
        ),
    ]
}

/// Distinct coverage types in first-appearance order across records
fn distinct_coverage_types(extractions: &[QuoteExtraction]) -> Vec<CoverageType> {
    let mut types = Vec::new();
    for extraction in extractions {
        for item in &extraction.coverages {
            if !types.contains(&item.coverage_type) {
                types.push(item.coverage_type.clone());
            }
        }
    }
    types
}

fn coverage_rows(extractions: &[QuoteExtraction]) -> Vec<ComparisonRow> {
    let mut rows = Vec::new();

    for coverage_type in distinct_coverage_types(extractions) {
        let items: Vec<_> = extractions
            .iter()
            .map(|e| e.coverage_of_type(&coverage_type))
            .collect();

        let present = items.iter().filter(|i| i.is_some()).count();
        let is_gap = present > 0 && present < extractions.len();
        let is_conflict = present == extractions.len() && has_basis_conflict(&items);

        let inputs = items
            .iter()
            .map(|item| match item {
                Some(item) => match item.limit {
                    Some(limit) => RowInput::money(limit),
                    None => RowInput::marker(INCLUDED),
                },
                None => RowInput::missing(NOT_COVERED),
            })
            .collect();

        let mut row = assemble_row(
            format!("coverage.{}", coverage_type.as_tag()),
            coverage_type.label(),
            RowCategory::Coverage,
            ComparisonSemantics::HigherIsBetter,
            inputs,
        );
        row.is_gap = is_gap;
        row.is_conflict = is_conflict;
        rows.push(row);

        if let Some(sub_row) = aggregate_sub_row(extractions, &coverage_type) {
            rows.push(sub_row);
        }
        if let Some(sub_row) = deductible_sub_row(&coverage_type, &items) {
            rows.push(sub_row);
        }
    }

    rows
}

/// Conflict rule: the coverage appears in every record but the stated
/// limit-basis classifications disagree. Unstated bases do not conflict.
fn has_basis_conflict(items: &[Option<&domain_extraction::CoverageItem>]) -> bool {
    let mut stated = items
        .iter()
        .filter_map(|item| item.and_then(|i| i.limit_basis));
    match stated.next() {
        Some(first) => stated.any(|basis| basis != first),
        None => false,
    }
}

/// Sub-row for a separately-stated aggregate limit
///
/// Emitted when any record carries an aggregate-basis item for the type
/// beyond its primary line (carriers often quote per-occurrence and
/// aggregate limits as separate schedule entries).
fn aggregate_sub_row(
    extractions: &[QuoteExtraction],
    coverage_type: &CoverageType,
) -> Option<ComparisonRow> {
    let aggregate_items: Vec<_> = extractions
        .iter()
        .map(|e| {
            let primary = e.coverage_of_type(coverage_type);
            e.coverages.iter().find(|item| {
                &item.coverage_type == coverage_type
                    && item.limit_basis == Some(LimitBasis::Aggregate)
                    && primary.is_some_and(|p| !std::ptr::eq(p, *item))
            })
        })
        .collect();

    if aggregate_items.iter().all(|i| i.is_none()) {
        return None;
    }

    let inputs = aggregate_items
        .iter()
        .map(|item| match item.and_then(|i| i.limit) {
            Some(limit) => RowInput::money(limit),
            None => RowInput::missing(NOT_FOUND),
        })
        .collect();

    let mut row = assemble_row(
        format!("coverage.{}.aggregate", coverage_type.as_tag()),
        "Aggregate Limit",
        RowCategory::Coverage,
        ComparisonSemantics::HigherIsBetter,
        inputs,
    );
    row.is_sub_row = true;
    Some(row)
}

/// Sub-row for per-line deductibles, emitted when any record states one
fn deductible_sub_row(
    coverage_type: &CoverageType,
    items: &[Option<&domain_extraction::CoverageItem>],
) -> Option<ComparisonRow> {
    if items.iter().all(|item| item.and_then(|i| i.deductible).is_none()) {
        return None;
    }

    let inputs = items
        .iter()
        .map(|item| match item.and_then(|i| i.deductible) {
            Some(deductible) => RowInput::money(deductible),
            None => RowInput::missing(NOT_FOUND),
        })
        .collect();

    let mut row = assemble_row(
        format!("coverage.{}.deductible", coverage_type.as_tag()),
        "Deductible",
        RowCategory::Coverage,
        ComparisonSemantics::LowerIsBetter,
        inputs,
    );
    row.is_sub_row = true;
    Some(row)
}

fn exclusion_rows(extractions: &[QuoteExtraction]) -> Vec<ComparisonRow> {
    // Distinct exclusion names in first-appearance order, keyed by the
    // normalized form so casing/whitespace variants collapse.
    let mut seen: Vec<(String, String)> = Vec::new();
    for extraction in extractions {
        for exclusion in &extraction.exclusions {
            let key = normalize_identifier(&exclusion.name);
            if !key.is_empty() && !seen.iter().any(|(k, _)| *k == key) {
                seen.push((key, exclusion.name.trim().to_string()));
            }
        }
    }

    seen.into_iter()
        .map(|(key, display_name)| {
            let inputs = extractions
                .iter()
                .map(|e| {
                    let listed = e
                        .exclusions
                        .iter()
                        .any(|x| normalize_identifier(&x.name) == key);
                    if listed {
                        RowInput::marker(EXCLUDED)
                    } else {
                        RowInput::missing(NOT_FOUND)
                    }
                })
                .collect();

            // Ids are derived from the normalized name so they stay stable
            // across snapshots even when earlier exclusions drop out.
            let slug = key.to_lowercase().replace(' ', "-");
            assemble_row(
                format!("exclusion.{}", slug),
                display_name,
                RowCategory::Exclusion,
                ComparisonSemantics::NotComparable,
                inputs,
            )
        })
        .collect()
}

fn summary_rows(extractions: &[QuoteExtraction]) -> Vec<ComparisonRow> {
    let mut rows = Vec::new();

    let total_inputs = extractions
        .iter()
        .map(|e| match e.total_premium() {
            Some(total) => RowInput::money(total),
            None => RowInput::missing(NOT_FOUND),
        })
        .collect();
    rows.push(assemble_row(
        "summary.total-premium",
        "Total Premium",
        RowCategory::Summary,
        ComparisonSemantics::LowerIsBetter,
        total_inputs,
    ));

    let taxes: Vec<Option<Money>> = extractions
        .iter()
        .map(|e| e.premium_breakdown.as_ref().and_then(|b| b.taxes_and_fees()))
        .collect();
    if taxes.iter().any(|t| t.is_some()) {
        let inputs = taxes
            .into_iter()
            .map(|t| match t {
                Some(amount) => RowInput::money(amount),
                None => RowInput::missing(NOT_FOUND),
            })
            .collect();
        rows.push(assemble_row(
            "summary.taxes-fees",
            "Taxes & Fees",
            RowCategory::Summary,
            ComparisonSemantics::LowerIsBetter,
            inputs,
        ));
    }

    let count_inputs = extractions
        .iter()
        .map(|e| RowInput::count(e.coverages.len()))
        .collect();
    rows.push(assemble_row(
        "summary.coverage-count",
        "Coverages Quoted",
        RowCategory::Summary,
        ComparisonSemantics::NotComparable,
        count_inputs,
    ));

    rows
}
