//! Integration tests for the comparison matrix builder

use rust_decimal_macros::dec;

use core_kernel::{DocumentId, Money};
use domain_comparison::{build_comparison_rows, CellStatus, RowCategory};
use domain_extraction::{CoverageType, DocumentSummary, LimitBasis, PremiumBreakdown};
use test_utils::{ExtractionFixtures, QuoteExtractionBuilder};

// ============================================================================
// Header Tests
// ============================================================================

mod header_tests {
    use super::*;

    #[test]
    fn test_carrier_name_header() {
        let records = ExtractionFixtures::two_quote_comparison();
        let table = build_comparison_rows(&records, None);

        assert_eq!(table.headers, vec!["Hartford".to_string(), "Travelers".to_string()]);
    }

    #[test]
    fn test_filename_fallback() {
        let records = vec![QuoteExtractionBuilder::new().build()];
        let summaries = vec![DocumentSummary {
            id: DocumentId::new(),
            filename: "acme-quote.pdf".to_string(),
        }];

        let table = build_comparison_rows(&records, Some(&summaries));
        assert_eq!(table.headers, vec!["acme-quote.pdf".to_string()]);
    }

    #[test]
    fn test_positional_fallback() {
        let records = vec![
            QuoteExtractionBuilder::new().build(),
            QuoteExtractionBuilder::new().build(),
        ];

        let table = build_comparison_rows(&records, None);
        assert_eq!(table.headers, vec!["Quote 1".to_string(), "Quote 2".to_string()]);
    }
}

// ============================================================================
// Best/Worst Annotation Tests
// ============================================================================

mod best_worst_tests {
    use super::*;

    #[test]
    fn test_higher_limit_wins_coverage_row() {
        // $500K vs $1M general liability: the second record is best
        let records = vec![
            QuoteExtractionBuilder::new()
                .with_carrier("A")
                .with_coverage(CoverageType::GeneralLiability, dec!(500000))
                .build(),
            QuoteExtractionBuilder::new()
                .with_carrier("B")
                .with_coverage(CoverageType::GeneralLiability, dec!(1000000))
                .build(),
        ];

        let table = build_comparison_rows(&records, None);
        let row = table
            .rows
            .iter()
            .find(|r| r.id == "coverage.general-liability")
            .unwrap();

        assert_eq!(row.best_index, Some(1));
        assert_eq!(row.worst_index, Some(0));
        assert!(row.has_difference);
    }

    #[test]
    fn test_cheaper_premium_wins_premium_row() {
        let records = vec![
            QuoteExtractionBuilder::new().with_annual_premium(dec!(500000)).build(),
            QuoteExtractionBuilder::new().with_annual_premium(dec!(450000)).build(),
        ];

        let table = build_comparison_rows(&records, None);
        let row = table
            .rows
            .iter()
            .find(|r| r.id == "basic.annual-premium")
            .unwrap();

        assert_eq!(row.best_index, Some(1));
        assert_eq!(row.worst_index, Some(0));
    }

    #[test]
    fn test_identical_limits_have_no_markers() {
        let records = vec![
            QuoteExtractionBuilder::new()
                .with_coverage(CoverageType::Property, dec!(750000))
                .build(),
            QuoteExtractionBuilder::new()
                .with_coverage(CoverageType::Property, dec!(750000))
                .build(),
        ];

        let table = build_comparison_rows(&records, None);
        let row = table.rows.iter().find(|r| r.id == "coverage.property").unwrap();

        assert_eq!(row.best_index, None);
        assert_eq!(row.worst_index, None);
        assert!(!row.has_difference);
    }

    #[test]
    fn test_free_text_rows_never_get_markers() {
        let records = vec![
            QuoteExtractionBuilder::new().with_policy_number("A-1").build(),
            QuoteExtractionBuilder::new().with_policy_number("B-2").build(),
        ];

        let table = build_comparison_rows(&records, None);
        let row = table
            .rows
            .iter()
            .find(|r| r.id == "basic.policy-number")
            .unwrap();

        assert_eq!(row.best_index, None);
        assert_eq!(row.worst_index, None);
        assert!(row.has_difference);
    }
}

// ============================================================================
// Gap and Conflict Flag Tests
// ============================================================================

mod flag_tests {
    use super::*;

    #[test]
    fn test_partial_coverage_flags_gap() {
        let records = vec![
            QuoteExtractionBuilder::new()
                .with_coverage(CoverageType::Cyber, dec!(1000000))
                .build(),
            QuoteExtractionBuilder::new().build(),
        ];

        let table = build_comparison_rows(&records, None);
        let row = table.rows.iter().find(|r| r.id == "coverage.cyber").unwrap();

        assert!(row.is_gap);
        assert!(!row.is_conflict);
        assert_eq!(row.cells[1].status, CellStatus::NotFound);
        assert_eq!(row.cells[1].display, "Not covered");
    }

    #[test]
    fn test_basis_mismatch_flags_conflict() {
        let records = vec![
            QuoteExtractionBuilder::new()
                .with_detailed_coverage(
                    CoverageType::GeneralLiability,
                    dec!(1000000),
                    LimitBasis::PerOccurrence,
                    dec!(5000),
                )
                .build(),
            QuoteExtractionBuilder::new()
                .with_detailed_coverage(
                    CoverageType::GeneralLiability,
                    dec!(1000000),
                    LimitBasis::Aggregate,
                    dec!(5000),
                )
                .build(),
        ];

        let table = build_comparison_rows(&records, None);
        let row = table
            .rows
            .iter()
            .find(|r| r.id == "coverage.general-liability")
            .unwrap();

        assert!(row.is_conflict);
        assert!(!row.is_gap);
    }

    #[test]
    fn test_gap_rows_keep_first_appearance_order() {
        // The gap row (cyber) stays where it first appeared rather than
        // being resorted; emphasis is carried by the flag alone.
        let records = vec![
            QuoteExtractionBuilder::new()
                .with_coverage(CoverageType::GeneralLiability, dec!(1000000))
                .with_coverage(CoverageType::Cyber, dec!(1000000))
                .with_coverage(CoverageType::Property, dec!(500000))
                .build(),
            QuoteExtractionBuilder::new()
                .with_coverage(CoverageType::GeneralLiability, dec!(1000000))
                .with_coverage(CoverageType::Property, dec!(500000))
                .build(),
        ];

        let table = build_comparison_rows(&records, None);
        let coverage_ids: Vec<_> = table
            .rows
            .iter()
            .filter(|r| r.category == RowCategory::Coverage && !r.is_sub_row)
            .map(|r| r.id.as_str())
            .collect();

        assert_eq!(
            coverage_ids,
            vec![
                "coverage.general-liability",
                "coverage.cyber",
                "coverage.property",
            ]
        );
    }
}

// ============================================================================
// Sub-row and Category Tests
// ============================================================================

mod structure_tests {
    use super::*;

    #[test]
    fn test_deductible_sub_row() {
        let records = vec![
            QuoteExtractionBuilder::new()
                .with_detailed_coverage(
                    CoverageType::GeneralLiability,
                    dec!(1000000),
                    LimitBasis::PerOccurrence,
                    dec!(5000),
                )
                .build(),
            QuoteExtractionBuilder::new()
                .with_detailed_coverage(
                    CoverageType::GeneralLiability,
                    dec!(1000000),
                    LimitBasis::PerOccurrence,
                    dec!(10000),
                )
                .build(),
        ];

        let table = build_comparison_rows(&records, None);
        let sub_row = table
            .rows
            .iter()
            .find(|r| r.id == "coverage.general-liability.deductible")
            .unwrap();

        assert!(sub_row.is_sub_row);
        // Lower deductible is better
        assert_eq!(sub_row.best_index, Some(0));
        assert_eq!(sub_row.worst_index, Some(1));
        assert_eq!(sub_row.cells[0].display, "$5,000");
    }

    #[test]
    fn test_no_deductible_sub_row_when_none_stated() {
        let records = vec![
            QuoteExtractionBuilder::new()
                .with_coverage(CoverageType::Property, dec!(500000))
                .build(),
            QuoteExtractionBuilder::new()
                .with_coverage(CoverageType::Property, dec!(500000))
                .build(),
        ];

        let table = build_comparison_rows(&records, None);
        assert!(!table.rows.iter().any(|r| r.id == "coverage.property.deductible"));
    }

    #[test]
    fn test_exclusion_rows_deduplicate_by_normalized_name() {
        let records = vec![
            QuoteExtractionBuilder::new().with_exclusion("Asbestos Exclusion").build(),
            QuoteExtractionBuilder::new().with_exclusion("ASBESTOS  EXCLUSION").build(),
        ];

        let table = build_comparison_rows(&records, None);
        let exclusion_rows: Vec<_> = table
            .rows
            .iter()
            .filter(|r| r.category == RowCategory::Exclusion)
            .collect();

        assert_eq!(exclusion_rows.len(), 1);
        assert_eq!(exclusion_rows[0].cells[0].display, "Excluded");
        assert_eq!(exclusion_rows[0].cells[1].display, "Excluded");
        assert!(!exclusion_rows[0].has_difference);
    }

    #[test]
    fn test_exclusion_row_ids_survive_removal_of_earlier_exclusions() {
        let before = vec![
            QuoteExtractionBuilder::new()
                .with_exclusion("Asbestos Exclusion")
                .with_exclusion("Mold Exclusion")
                .build(),
            QuoteExtractionBuilder::new().build(),
        ];
        let after = vec![
            QuoteExtractionBuilder::new().with_exclusion("Mold Exclusion").build(),
            QuoteExtractionBuilder::new().build(),
        ];

        let id_of = |records: &[_]| {
            build_comparison_rows(records, None)
                .rows
                .into_iter()
                .find(|r| r.label == "Mold Exclusion")
                .map(|r| r.id)
        };

        assert_eq!(id_of(&before), Some("exclusion.mold-exclusion".to_string()));
        assert_eq!(id_of(&before), id_of(&after));
    }

    #[test]
    fn test_unlimited_coverage_in_all_records_shows_included() {
        let records = vec![
            QuoteExtractionBuilder::new()
                .with_unlimited_coverage(CoverageType::WorkersComp)
                .build(),
            QuoteExtractionBuilder::new()
                .with_unlimited_coverage(CoverageType::WorkersComp)
                .build(),
        ];

        let table = build_comparison_rows(&records, None);
        let row = table
            .rows
            .iter()
            .find(|r| r.id == "coverage.workers-comp")
            .unwrap();

        assert_eq!(row.cells[0].display, "Included");
        assert_eq!(row.cells[1].display, "Included");
        assert!(!row.has_difference);
        assert_eq!(row.best_index, None);
    }

    #[test]
    fn test_summary_rows_draw_from_premium_breakdown() {
        let records = vec![
            QuoteExtractionBuilder::new()
                .with_annual_premium(dec!(50000))
                .with_premium_breakdown(PremiumBreakdown {
                    taxes: Some(Money::usd(dec!(1500))),
                    fees: Some(Money::usd(dec!(250))),
                    total_premium: Some(Money::usd(dec!(51750))),
                    ..Default::default()
                })
                .build(),
            QuoteExtractionBuilder::new().with_annual_premium(dec!(48000)).build(),
        ];

        let table = build_comparison_rows(&records, None);

        let total = table
            .rows
            .iter()
            .find(|r| r.id == "summary.total-premium")
            .unwrap();
        // Stated total for the first record, annual-premium fallback for
        // the second; cheaper total is best
        assert_eq!(total.cells[0].display, "$51,750");
        assert_eq!(total.cells[1].display, "$48,000");
        assert_eq!(total.best_index, Some(1));

        let taxes = table
            .rows
            .iter()
            .find(|r| r.id == "summary.taxes-fees")
            .unwrap();
        assert_eq!(taxes.cells[0].display, "$1,750");
        assert_eq!(taxes.cells[1].status, CellStatus::NotFound);
    }

    #[test]
    fn test_currency_cells_use_grouped_format() {
        let records = vec![QuoteExtractionBuilder::new()
            .with_coverage(CoverageType::GeneralLiability, dec!(1000000))
            .build()];

        let table = build_comparison_rows(&records, None);
        let row = table
            .rows
            .iter()
            .find(|r| r.id == "coverage.general-liability")
            .unwrap();

        assert_eq!(row.cells[0].display, "$1,000,000");
    }
}

// ============================================================================
// Determinism Tests
// ============================================================================

mod determinism_tests {
    use super::*;

    #[test]
    fn test_identical_input_yields_identical_output() {
        let records = ExtractionFixtures::two_quote_comparison();

        let first = build_comparison_rows(&records, None);
        let second = build_comparison_rows(&records, None);

        assert_eq!(first, second);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let records = ExtractionFixtures::two_quote_comparison();
        let snapshot = records.clone();

        let _ = build_comparison_rows(&records, None);

        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_table_serializes_to_camel_case() {
        let records = ExtractionFixtures::two_quote_comparison();
        let table = build_comparison_rows(&records, None);

        let json = serde_json::to_value(&table).unwrap();
        let first_row = &json["rows"][0];
        assert!(first_row.get("hasDifference").is_some());
        assert!(first_row.get("bestIndex").is_some());
        assert!(first_row.get("isSubRow").is_some());
    }
}
