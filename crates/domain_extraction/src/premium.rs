//! Premium breakdown structures
//!
//! Carriers itemize premium differently; every component here is optional.
//! The stated total falls back to the extraction's top-level annual premium
//! when the document does not itemize one.

use serde::{Deserialize, Serialize};

use crate::coverage::CoverageType;
use core_kernel::Money;

/// Premium attributed to a single coverage line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoveragePremium {
    pub coverage_type: CoverageType,
    pub premium: Money,
}

/// Itemized premium components from a quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumBreakdown {
    /// Base premium before taxes and fees
    pub base_premium: Option<Money>,
    /// Per-coverage premium allocation
    #[serde(default)]
    pub coverage_premiums: Vec<CoveragePremium>,
    /// State and municipal taxes
    pub taxes: Option<Money>,
    /// Carrier policy fees
    pub fees: Option<Money>,
    /// Broker fee
    pub broker_fee: Option<Money>,
    /// Surplus lines tax, for non-admitted placements
    pub surplus_lines_tax: Option<Money>,
    /// Total premium as stated on the document
    pub total_premium: Option<Money>,
    /// Payment plan label, e.g. "25% down, 9 installments"
    pub payment_plan: Option<String>,
}

impl PremiumBreakdown {
    /// The stated total, falling back to the record's annual premium
    pub fn effective_total(&self, annual_premium: Option<Money>) -> Option<Money> {
        self.total_premium.or(annual_premium)
    }

    /// Sum of taxes, fees, broker fee, and surplus lines tax
    ///
    /// Returns `None` when no component is present; components with
    /// mismatched currencies are summed in document order and the first
    /// mismatch stops the sum (extraction should never produce one).
    pub fn taxes_and_fees(&self) -> Option<Money> {
        let components = [self.taxes, self.fees, self.broker_fee, self.surplus_lines_tax];

        let mut total: Option<Money> = None;
        for component in components.into_iter().flatten() {
            total = match total {
                None => Some(component),
                Some(sum) => match sum.checked_add(&component) {
                    Ok(new_sum) => Some(new_sum),
                    Err(_) => return Some(sum),
                },
            };
        }
        total
    }
}
