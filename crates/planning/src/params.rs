use serde::{Deserialize, Serialize};

use crate::error::{PlanningError, PlanningResult};

/// Cost parameters for a single inventory item (value object).
///
/// Compared by value, created fresh per evaluation, never stored. There is
/// no identity beyond the three fields.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryParameters {
    /// Annual demand (D), units per year.
    pub annual_demand: f64,
    /// Ordering cost (S), currency per placed order.
    pub ordering_cost: f64,
    /// Holding cost (H), currency per unit held for one year.
    pub holding_cost: f64,
}

impl InventoryParameters {
    pub fn new(annual_demand: f64, ordering_cost: f64, holding_cost: f64) -> Self {
        Self {
            annual_demand,
            ordering_cost,
            holding_cost,
        }
    }

    /// Check the evaluation preconditions: every parameter finite and > 0.
    ///
    /// A zero ordering or holding cost makes the closed form degenerate
    /// (division by zero or a zero quantity), so zeros are rejected rather
    /// than clamped or defaulted.
    pub fn validate(&self) -> PlanningResult<()> {
        ensure_positive("annual_demand", self.annual_demand)?;
        ensure_positive("ordering_cost", self.ordering_cost)?;
        ensure_positive("holding_cost", self.holding_cost)?;
        Ok(())
    }

    /// Total annual inventory cost of ordering in lots of `quantity`:
    /// average stock level times the holding rate, plus order frequency
    /// times the per-order cost.
    pub fn annual_cost_at(&self, quantity: f64) -> f64 {
        (quantity / 2.0) * self.holding_cost + (self.annual_demand / quantity) * self.ordering_cost
    }
}

fn ensure_positive(field: &'static str, value: f64) -> PlanningResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(PlanningError::invalid_input(format!(
            "{field} must be a finite positive number (got {value})"
        )));
    }
    Ok(())
}
