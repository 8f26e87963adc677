use serde::{Deserialize, Serialize};

use crate::error::{PlanningError, PlanningResult};
use crate::params::InventoryParameters;

/// One sampled point of the cost-vs-quantity curve.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub quantity: f64,
    pub cost: f64,
}

/// Sampling options for the cost curve.
///
/// The curve exists to show that the annual cost is convex with its minimum
/// at the EOQ, so the default range extends to twice the optimum.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveSpec {
    /// Number of samples (must be >= 2).
    sample_count: usize,
    /// Upper bound of the sampled range as a multiple of the EOQ.
    range_multiplier: f64,
}

impl Default for CurveSpec {
    fn default() -> Self {
        Self {
            sample_count: 100,
            range_multiplier: 2.0,
        }
    }
}

impl CurveSpec {
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_range_multiplier(mut self, range_multiplier: f64) -> Self {
        self.range_multiplier = range_multiplier;
        self
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn range_multiplier(&self) -> f64 {
        self.range_multiplier
    }

    pub fn validate(&self) -> PlanningResult<()> {
        if self.sample_count < 2 {
            return Err(PlanningError::invalid_input(format!(
                "sample_count must be at least 2 (got {})",
                self.sample_count
            )));
        }
        if !(self.range_multiplier.is_finite() && self.range_multiplier > 0.0) {
            return Err(PlanningError::invalid_input(format!(
                "range_multiplier must be a finite positive number (got {})",
                self.range_multiplier
            )));
        }
        Ok(())
    }
}

/// Outcome of an EOQ evaluation.
///
/// This is a derived, ephemeral result for callers to display or discard.
/// It is not a domain event and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EoqEvaluation {
    /// The economic order quantity, in units.
    pub optimal_quantity: f64,
    /// How many orders per year the optimal quantity implies (D / EOQ).
    pub orders_per_year: f64,
    /// Annual holding plus ordering cost at the optimal quantity.
    pub total_annual_cost: f64,
    /// Cost-vs-quantity samples over `(0, range_multiplier * EOQ]`.
    pub cost_curve: Vec<CurvePoint>,
}

/// Evaluate the closed-form EOQ for the given parameters.
///
/// `EOQ = sqrt(2 * D * S / H)`. At that quantity the holding term
/// `(EOQ / 2) * H` and the ordering term `(D / EOQ) * S` are equal; their
/// sum is the minimum of the convex annual-cost function.
///
/// All arithmetic stays in `f64` with no rounding; display rounding is a
/// presentation concern.
pub fn evaluate(
    params: &InventoryParameters,
    curve: &CurveSpec,
) -> PlanningResult<EoqEvaluation> {
    params.validate()?;
    curve.validate()?;

    let optimal_quantity = optimal_quantity(params);
    let orders_per_year = params.annual_demand / optimal_quantity;
    let total_annual_cost = params.annual_cost_at(optimal_quantity);

    Ok(EoqEvaluation {
        optimal_quantity,
        orders_per_year,
        total_annual_cost,
        cost_curve: sample_curve(params, curve, optimal_quantity),
    })
}

/// Sample the annual-cost curve on its own, without the derived metrics.
///
/// Same preconditions and sampling grid as [`evaluate`]; pure and
/// deterministic, so re-invocation with the same inputs yields the same
/// points.
pub fn cost_curve(
    params: &InventoryParameters,
    curve: &CurveSpec,
) -> PlanningResult<Vec<CurvePoint>> {
    params.validate()?;
    curve.validate()?;

    Ok(sample_curve(params, curve, optimal_quantity(params)))
}

fn optimal_quantity(params: &InventoryParameters) -> f64 {
    (2.0 * params.annual_demand * params.ordering_cost / params.holding_cost).sqrt()
}

/// Quantities are spaced one step apart from `step` up to the range upper
/// bound, so the lower end stays strictly above zero and the `D / q` term
/// never divides by zero.
fn sample_curve(
    params: &InventoryParameters,
    curve: &CurveSpec,
    optimal_quantity: f64,
) -> Vec<CurvePoint> {
    let upper = curve.range_multiplier() * optimal_quantity;
    let step = upper / curve.sample_count() as f64;

    (1..=curve.sample_count())
        .map(|i| {
            let quantity = step * i as f64;
            CurvePoint {
                quantity,
                cost: params.annual_cost_at(quantity),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smart_office_params() -> InventoryParameters {
        InventoryParameters::new(5000.0, 200_000.0, 5000.0)
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn evaluate_matches_the_worked_example() {
        let evaluation = evaluate(&smart_office_params(), &CurveSpec::default()).unwrap();

        // EOQ = sqrt(2 * 5000 * 200000 / 5000) = sqrt(400000)
        assert_close(evaluation.optimal_quantity, 400_000.0_f64.sqrt());
        assert_close(evaluation.orders_per_year, 5000.0 / 400_000.0_f64.sqrt());
        assert_close(evaluation.total_annual_cost, 3_162_277.6601683795);
    }

    #[test]
    fn holding_and_ordering_terms_balance_at_the_optimum() {
        let params = smart_office_params();
        let evaluation = evaluate(&params, &CurveSpec::default()).unwrap();

        let holding = (evaluation.optimal_quantity / 2.0) * params.holding_cost;
        let ordering = (params.annual_demand / evaluation.optimal_quantity) * params.ordering_cost;

        assert_close(holding, ordering);
        assert_close(evaluation.total_annual_cost, holding + ordering);
    }

    #[test]
    fn no_sampled_point_beats_the_optimum() {
        let evaluation = evaluate(&smart_office_params(), &CurveSpec::default()).unwrap();

        for point in &evaluation.cost_curve {
            assert!(
                point.cost >= evaluation.total_annual_cost - 1e-9 * evaluation.total_annual_cost,
                "cost {} at quantity {} is below the optimum {}",
                point.cost,
                point.quantity,
                evaluation.total_annual_cost
            );
        }
    }

    #[test]
    fn curve_covers_the_requested_range() {
        let spec = CurveSpec::default()
            .with_sample_count(50)
            .with_range_multiplier(3.0);
        let evaluation = evaluate(&smart_office_params(), &spec).unwrap();
        let curve = &evaluation.cost_curve;

        assert_eq!(curve.len(), 50);
        assert!(curve[0].quantity > 0.0);
        assert_close(
            curve.last().unwrap().quantity,
            3.0 * evaluation.optimal_quantity,
        );

        for pair in curve.windows(2) {
            assert!(pair[0].quantity < pair[1].quantity);
        }
    }

    #[test]
    fn cost_decreases_before_and_increases_after_the_optimum() {
        let evaluation = evaluate(&smart_office_params(), &CurveSpec::default()).unwrap();
        let eoq = evaluation.optimal_quantity;

        for pair in evaluation.cost_curve.windows(2) {
            if pair[1].quantity <= eoq {
                assert!(
                    pair[0].cost > pair[1].cost,
                    "cost should fall towards the optimum at quantity {}",
                    pair[1].quantity
                );
            }
            if pair[0].quantity >= eoq {
                assert!(
                    pair[1].cost > pair[0].cost,
                    "cost should rise past the optimum at quantity {}",
                    pair[0].quantity
                );
            }
        }
    }

    #[test]
    fn cost_curve_matches_the_curve_embedded_in_the_evaluation() {
        let params = smart_office_params();
        let spec = CurveSpec::default().with_sample_count(25);

        let standalone = cost_curve(&params, &spec).unwrap();
        let embedded = evaluate(&params, &spec).unwrap().cost_curve;

        assert_eq!(standalone, embedded);
    }

    #[test]
    fn rejects_non_positive_parameters_without_computing() {
        let cases = [
            InventoryParameters::new(0.0, 200_000.0, 5000.0),
            InventoryParameters::new(5000.0, 0.0, 5000.0),
            InventoryParameters::new(5000.0, 200_000.0, 0.0),
            InventoryParameters::new(-5000.0, 200_000.0, 5000.0),
            // Degenerate example: demand without costs.
            InventoryParameters::new(1.0, 0.0, 0.0),
        ];

        for params in cases {
            let err = evaluate(&params, &CurveSpec::default()).unwrap_err();
            assert!(matches!(err, PlanningError::InvalidInput(_)), "{params:?}");
        }
    }

    #[test]
    fn curve_spec_requires_at_least_two_samples() {
        for bad in [0, 1] {
            let spec = CurveSpec::default().with_sample_count(bad);
            let err = evaluate(&smart_office_params(), &spec).unwrap_err();
            match err {
                PlanningError::InvalidInput(msg) => assert!(msg.contains("sample_count")),
            }
        }
    }

    #[test]
    fn curve_spec_rejects_non_positive_multiplier() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let spec = CurveSpec::default().with_range_multiplier(bad);
            let err = evaluate(&smart_office_params(), &spec).unwrap_err();
            match err {
                PlanningError::InvalidInput(msg) => assert!(msg.contains("range_multiplier")),
            }
        }
    }
}
