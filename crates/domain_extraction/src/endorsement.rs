//! Endorsements extracted from quote documents
//!
//! An endorsement is a named amendment to a base policy, identified by a
//! carrier-assigned form number. Two endorsements are the same instrument
//! when their normalized form numbers match (see `core_kernel::FormNumber`),
//! never by object identity.

use serde::{Deserialize, Serialize};

use crate::coverage::CoverageType;
use core_kernel::FormNumber;

/// Effect an endorsement has on the base policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndorsementType {
    /// Expands coverage (e.g. additional insured)
    Broadening,
    /// Narrows coverage (e.g. exclusionary endorsement)
    Restricting,
    /// Changes terms subject to conditions
    Conditional,
}

/// An endorsement listed on a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endorsement {
    /// Carrier-assigned form number, e.g. "CG 20 10"
    pub form_number: FormNumber,
    /// Display name from the document
    pub name: String,
    /// Effect classification, when the extractor can determine it
    pub endorsement_type: Option<EndorsementType>,
    /// Coverage the endorsement modifies, when stated
    pub affects_coverage: Option<CoverageType>,
    /// Source page numbers
    #[serde(default)]
    pub source_pages: Vec<u32>,
}

impl Endorsement {
    /// Creates an endorsement from a form number and display name
    pub fn new(form_number: impl Into<FormNumber>, name: impl Into<String>) -> Self {
        Self {
            form_number: form_number.into(),
            name: name.into(),
            endorsement_type: None,
            affects_coverage: None,
            source_pages: Vec::new(),
        }
    }

    /// Returns true if this and `other` carry matching form numbers
    pub fn same_instrument(&self, other: &Endorsement) -> bool {
        self.form_number.matches(&other.form_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_instrument_tolerates_spacing() {
        let a = Endorsement::new("CG 20 10", "Additional Insured - Owners");
        let b = Endorsement::new("cg2010", "Addl Insured");

        assert!(a.same_instrument(&b));
    }

    #[test]
    fn test_different_forms_are_distinct() {
        let a = Endorsement::new("CG 20 10", "Additional Insured - Owners");
        let b = Endorsement::new("CG 20 37", "Additional Insured - Completed Ops");

        assert!(!a.same_instrument(&b));
    }

    #[test]
    fn test_endorsement_type_wire_names() {
        let json = serde_json::to_string(&EndorsementType::Broadening).unwrap();
        assert_eq!(json, "\"broadening\"");
    }
}
