//! Coverage line items, deductibles, and exclusions
//!
//! These are plain tagged records extracted from quote documents. There is
//! no polymorphic behavior here, only data classification; absent limits
//! and deductibles mean "unknown", never zero.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use core_kernel::Money;

/// Commercial lines coverage types
///
/// The enumeration covers the lines this platform quotes. Extraction output
/// that names anything else lands in `Other` rather than failing, keeping
/// the engine total over malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CoverageType {
    GeneralLiability,
    Property,
    WorkersComp,
    Umbrella,
    ProfessionalLiability,
    Cyber,
    CommercialAuto,
    EmploymentPractices,
    DirectorsOfficers,
    InlandMarine,
    Crime,
    /// A coverage type outside the known enumeration
    Other(String),
}

impl CoverageType {
    /// The kebab-case wire tag used by the extraction service
    pub fn as_tag(&self) -> &str {
        match self {
            CoverageType::GeneralLiability => "general-liability",
            CoverageType::Property => "property",
            CoverageType::WorkersComp => "workers-comp",
            CoverageType::Umbrella => "umbrella",
            CoverageType::ProfessionalLiability => "professional-liability",
            CoverageType::Cyber => "cyber",
            CoverageType::CommercialAuto => "commercial-auto",
            CoverageType::EmploymentPractices => "employment-practices",
            CoverageType::DirectorsOfficers => "directors-officers",
            CoverageType::InlandMarine => "inland-marine",
            CoverageType::Crime => "crime",
            CoverageType::Other(tag) => tag,
        }
    }

    /// Parses a wire tag, mapping unknown tags to `Other`
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "general-liability" => CoverageType::GeneralLiability,
            "property" => CoverageType::Property,
            "workers-comp" => CoverageType::WorkersComp,
            "umbrella" => CoverageType::Umbrella,
            "professional-liability" => CoverageType::ProfessionalLiability,
            "cyber" => CoverageType::Cyber,
            "commercial-auto" => CoverageType::CommercialAuto,
            "employment-practices" => CoverageType::EmploymentPractices,
            "directors-officers" => CoverageType::DirectorsOfficers,
            "inland-marine" => CoverageType::InlandMarine,
            "crime" => CoverageType::Crime,
            other => CoverageType::Other(other.to_string()),
        }
    }

    /// Human-readable label for comparison rows and findings
    pub fn label(&self) -> String {
        match self {
            CoverageType::GeneralLiability => "General Liability".to_string(),
            CoverageType::Property => "Property".to_string(),
            CoverageType::WorkersComp => "Workers' Compensation".to_string(),
            CoverageType::Umbrella => "Umbrella".to_string(),
            CoverageType::ProfessionalLiability => "Professional Liability".to_string(),
            CoverageType::Cyber => "Cyber Liability".to_string(),
            CoverageType::CommercialAuto => "Commercial Auto".to_string(),
            CoverageType::EmploymentPractices => "Employment Practices Liability".to_string(),
            CoverageType::DirectorsOfficers => "Directors & Officers".to_string(),
            CoverageType::InlandMarine => "Inland Marine".to_string(),
            CoverageType::Crime => "Crime".to_string(),
            CoverageType::Other(tag) => tag.clone(),
        }
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for CoverageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for CoverageType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagVisitor;

        impl Visitor<'_> for TagVisitor {
            type Value = CoverageType;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a coverage type tag")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(CoverageType::from_tag(v))
            }
        }

        deserializer.deserialize_str(TagVisitor)
    }
}

/// How a limit applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LimitBasis {
    PerOccurrence,
    Aggregate,
    PerClaim,
    CombinedSingleLimit,
}

/// A single coverage line item from a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageItem {
    /// Type of coverage; always present
    pub coverage_type: CoverageType,
    /// Coverage limit; absent means unknown, not zero
    pub limit: Option<Money>,
    /// How the limit applies, when the document states it
    pub limit_basis: Option<LimitBasis>,
    /// Deductible for this line; absent means unknown, not zero
    pub deductible: Option<Money>,
    /// Source page numbers in the quote document
    #[serde(default)]
    pub source_pages: Vec<u32>,
}

impl CoverageItem {
    /// Creates a coverage item with only a type, limits unknown
    pub fn new(coverage_type: CoverageType) -> Self {
        Self {
            coverage_type,
            limit: None,
            limit_basis: None,
            deductible: None,
            source_pages: Vec::new(),
        }
    }

    /// Sets the limit
    pub fn with_limit(mut self, limit: Money) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the limit basis
    pub fn with_basis(mut self, basis: LimitBasis) -> Self {
        self.limit_basis = Some(basis);
        self
    }

    /// Sets the deductible
    pub fn with_deductible(mut self, deductible: Money) -> Self {
        self.deductible = Some(deductible);
        self
    }
}

/// A standalone deductible entry (some carriers list deductibles in a
/// separate schedule rather than per coverage line)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deductible {
    /// Display label from the document
    pub label: String,
    /// Deductible amount; absent means unknown
    pub amount: Option<Money>,
    /// Coverage the deductible applies to, when stated
    pub applies_to: Option<CoverageType>,
    /// Source page numbers
    #[serde(default)]
    pub source_pages: Vec<u32>,
}

/// An exclusion listed in a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exclusion {
    /// Exclusion name as extracted
    pub name: String,
    /// Longer description, when the document provides one
    pub description: Option<String>,
    /// Coverage the exclusion applies to, when stated
    pub applies_to: Option<CoverageType>,
    /// Source page numbers
    #[serde(default)]
    pub source_pages: Vec<u32>,
}
