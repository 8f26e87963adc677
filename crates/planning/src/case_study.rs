use serde::{Deserialize, Serialize};

use crate::params::InventoryParameters;

/// A named preset parameter set.
///
/// Presentation layers offer these as one-click inputs; evaluating one is
/// just [`crate::eoq::evaluate`] over its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    /// Stable identifier used in URLs and lookups.
    pub slug: String,
    /// Human-readable name.
    pub name: String,
    pub description: String,
    /// Currency symbol the amounts are denominated in.
    pub currency: String,
    pub parameters: InventoryParameters,
}

impl CaseStudy {
    /// Look up a built-in case study by slug.
    pub fn find(slug: &str) -> Option<CaseStudy> {
        builtin_case_studies().into_iter().find(|c| c.slug == slug)
    }
}

/// The built-in case studies.
pub fn builtin_case_studies() -> Vec<CaseStudy> {
    vec![smart_office()]
}

/// Stationery store ordering 5000 units a year at Rp 200,000 per order and
/// Rp 5,000 per unit-year of storage.
fn smart_office() -> CaseStudy {
    CaseStudy {
        slug: "smart-office".to_string(),
        name: "Toko Smart Office".to_string(),
        description: "Stationery store restocking a single fast-moving item".to_string(),
        currency: "Rp".to_string(),
        parameters: InventoryParameters::new(5000.0, 200_000.0, 5000.0),
    }
}
