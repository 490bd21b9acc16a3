//! Missing-endorsement detection
//!
//! Groups endorsements across records by fuzzy form-number matching, then
//! flags every logical endorsement present in at least one but not all
//! records. Requires two or more records.

use serde::{Deserialize, Serialize};

use core_kernel::FormNumber;
use domain_extraction::QuoteExtraction;

use crate::taxonomy::{endorsement_importance, EndorsementImportance};

/// An endorsement carried by some quotes but not others
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndorsementGapFinding {
    /// Form number of the first-seen variant
    pub form_number: FormNumber,
    /// Display name of the first-seen variant
    pub name: String,
    pub importance: EndorsementImportance,
    /// Labels of the records that do carry the endorsement
    pub present_in: Vec<String>,
}

/// One logical endorsement seen across the record set
struct EndorsementGroup {
    form_number: FormNumber,
    name: String,
    /// Record indices carrying the endorsement, deduplicated, ascending
    record_indices: Vec<usize>,
}

/// Detects endorsements present in some but not all records
///
/// Two endorsements with matching normalized form numbers are the same
/// logical endorsement regardless of how each document spells the form.
/// Findings are ordered critical first; within a tier, first appearance.
pub fn detect_endorsement_gaps(extractions: &[QuoteExtraction]) -> Vec<EndorsementGapFinding> {
    if extractions.len() < 2 {
        return Vec::new();
    }

    let mut groups: Vec<EndorsementGroup> = Vec::new();
    for (index, extraction) in extractions.iter().enumerate() {
        for endorsement in &extraction.endorsements {
            match groups
                .iter_mut()
                .find(|g| g.form_number.matches(&endorsement.form_number))
            {
                Some(group) => {
                    if !group.record_indices.contains(&index) {
                        group.record_indices.push(index);
                    }
                }
                None => groups.push(EndorsementGroup {
                    form_number: endorsement.form_number.clone(),
                    name: endorsement.name.clone(),
                    record_indices: vec![index],
                }),
            }
        }
    }

    let mut findings: Vec<EndorsementGapFinding> = groups
        .into_iter()
        .filter(|g| g.record_indices.len() < extractions.len())
        .map(|g| EndorsementGapFinding {
            importance: endorsement_importance(&g.form_number),
            present_in: g
                .record_indices
                .iter()
                .map(|&i| extractions[i].display_label(i))
                .collect(),
            form_number: g.form_number,
            name: g.name,
        })
        .collect();

    // Stable sort keeps first-appearance order within each tier.
    findings.sort_by_key(|f| f.importance);
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_extraction::Endorsement;

    fn record(carrier: &str, forms: &[(&str, &str)]) -> QuoteExtraction {
        let mut extraction = QuoteExtraction::new();
        extraction.carrier_name = Some(carrier.to_string());
        for (form, name) in forms {
            extraction.endorsements.push(Endorsement::new(*form, *name));
        }
        extraction
    }

    #[test]
    fn test_requires_two_records() {
        let single = [record("A", &[("CG 20 10", "Additional Insured")])];
        assert!(detect_endorsement_gaps(&single).is_empty());
        assert!(detect_endorsement_gaps(&[]).is_empty());
    }

    #[test]
    fn test_detects_endorsement_missing_from_one_record() {
        let records = [
            record("Hartford", &[("CG 20 10", "Additional Insured")]),
            record("Travelers", &[]),
        ];

        let findings = detect_endorsement_gaps(&records);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].importance, EndorsementImportance::Critical);
        assert_eq!(findings[0].present_in, vec!["Hartford".to_string()]);
    }

    #[test]
    fn test_spacing_variants_group_together() {
        let records = [
            record("A", &[("CG 20 10", "Additional Insured")]),
            record("B", &[("CG  20  10", "Addl Insured - Owners")]),
            record("C", &[("cg2010", "AI Endorsement")]),
        ];

        // All three records carry the same logical endorsement
        assert!(detect_endorsement_gaps(&records).is_empty());
    }

    #[test]
    fn test_partial_presence_with_variants() {
        let records = [
            record("A", &[("CG 20 10", "Additional Insured")]),
            record("B", &[("cg2010", "AI")]),
            record("C", &[]),
        ];

        let findings = detect_endorsement_gaps(&records);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].present_in,
            vec!["A".to_string(), "B".to_string()]
        );
        // First-seen variant supplies form number and name
        assert_eq!(findings[0].form_number.as_str(), "CG 20 10");
        assert_eq!(findings[0].name, "Additional Insured");
    }

    #[test]
    fn test_critical_sorted_before_recommended() {
        let records = [
            record(
                "A",
                &[
                    ("CG 21 47", "Employment Exclusion"),
                    ("CG 20 10", "Additional Insured"),
                ],
            ),
            record("B", &[]),
        ];

        let findings = detect_endorsement_gaps(&records);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].importance, EndorsementImportance::Critical);
        assert_eq!(findings[1].importance, EndorsementImportance::Recommended);
    }

    #[test]
    fn test_duplicate_listing_in_one_record_counts_once() {
        let records = [
            record(
                "A",
                &[("CG 20 10", "Additional Insured"), ("CG 20 10", "AI Duplicate")],
            ),
            record("B", &[]),
        ];

        let findings = detect_endorsement_gaps(&records);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].present_in.len(), 1);
    }
}
