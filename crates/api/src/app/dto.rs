use serde::Deserialize;

use orderpoint_planning::{
    CaseStudy, CurvePoint, CurveSpec, EoqEvaluation, InventoryParameters,
};

use crate::app::money;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct EvaluateEoqRequest {
    pub annual_demand: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    /// Currency symbol for the formatted amounts (display only).
    pub currency: Option<String>,
    pub curve: Option<CurveOptions>,
}

#[derive(Debug, Deserialize)]
pub struct CurveOptions {
    pub sample_count: Option<usize>,
    pub range_multiplier: Option<f64>,
}

impl EvaluateEoqRequest {
    pub fn parameters(&self) -> InventoryParameters {
        InventoryParameters::new(self.annual_demand, self.ordering_cost, self.holding_cost)
    }

    /// Curve spec with defaults filled in for omitted options.
    pub fn curve_spec(&self) -> CurveSpec {
        let mut spec = CurveSpec::default();
        if let Some(options) = &self.curve {
            if let Some(sample_count) = options.sample_count {
                spec = spec.with_sample_count(sample_count);
            }
            if let Some(range_multiplier) = options.range_multiplier {
                spec = spec.with_range_multiplier(range_multiplier);
            }
        }
        spec
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn evaluation_to_json(
    evaluation: &EoqEvaluation,
    currency: Option<&str>,
) -> serde_json::Value {
    serde_json::json!({
        "optimal_quantity": evaluation.optimal_quantity,
        "orders_per_year": evaluation.orders_per_year,
        "total_annual_cost": evaluation.total_annual_cost,
        "cost_curve": evaluation.cost_curve.iter().map(curve_point_to_json).collect::<Vec<_>>(),
        "display": {
            "optimal_quantity": format!("{:.2} units", evaluation.optimal_quantity),
            "orders_per_year": format!("{:.2} orders/year", evaluation.orders_per_year),
            "total_annual_cost": money::format_amount(evaluation.total_annual_cost, currency),
        },
    })
}

pub fn curve_point_to_json(point: &CurvePoint) -> serde_json::Value {
    serde_json::json!({
        "quantity": point.quantity,
        "cost": point.cost,
    })
}

pub fn case_study_to_json(study: &CaseStudy) -> serde_json::Value {
    serde_json::json!({
        "slug": study.slug,
        "name": study.name,
        "description": study.description,
        "currency": study.currency,
        "parameters": {
            "annual_demand": study.parameters.annual_demand,
            "ordering_cost": study.parameters.ordering_cost,
            "holding_cost": study.parameters.holding_cost,
        },
    })
}
