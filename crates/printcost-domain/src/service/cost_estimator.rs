//! Layered cost estimation for printed pieces
//!
//! Cost components stack in a fixed order: the four base costs are summed,
//! the failure allowance is applied to that sum, profit to the
//! failure-adjusted subtotal, and tax to the profit-adjusted price. The
//! order matters — each percentage compounds on the previous stage's total,
//! not on the original base.

use serde::{Deserialize, Serialize};

use crate::model::{CostBreakdown, CostInputs};

/// Rounding applied to the pre-tax price
///
/// The public quote form rounds the pre-tax price up to the nearest 5 before
/// tax is added, which changes the tax base. The admin calculator does not
/// round at all. Rounding happens between the profit and tax stages, never
/// after tax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum RoundingPolicy {
    /// No rounding; tax is computed on the exact pre-tax price
    #[default]
    Exact,
    /// Round the pre-tax price up to the nearest multiple of the step
    CeilToStep(f64),
}

impl RoundingPolicy {
    fn apply(self, price: f64) -> f64 {
        match self {
            RoundingPolicy::Exact => price,
            RoundingPolicy::CeilToStep(step) if step > 0.0 => (price / step).ceil() * step,
            RoundingPolicy::CeilToStep(_) => price,
        }
    }
}

/// Combine separate hour and minute fields into a duration in hours
pub fn duration_hours(hours: f64, minutes: f64) -> f64 {
    hours + minutes / 60.0
}

/// Estimate the full cost breakdown for a piece
///
/// # Formula
/// material  = (mass_g / 1000) x price_per_kg
/// energy    = (watts x hours / 1000) x cost_per_kwh
/// labor     = (post_minutes / 60) x labor_rate
/// machine   = hours x machine_rate
/// then failure, profit, and tax are layered in that order.
///
/// Pure arithmetic: zero mass or duration yields zero components, negative
/// or non-finite inputs propagate unchecked.
pub fn estimate_cost(inputs: &CostInputs) -> CostBreakdown {
    estimate_cost_with_policy(inputs, RoundingPolicy::Exact)
}

/// Estimate the cost breakdown with an explicit pre-tax rounding policy
pub fn estimate_cost_with_policy(inputs: &CostInputs, policy: RoundingPolicy) -> CostBreakdown {
    let material_cost = (inputs.part_mass_grams / 1000.0) * inputs.material_price_per_kg;

    let electricity_cost =
        (inputs.power_rating_watts * inputs.print_duration_hours / 1000.0)
            * inputs.energy_cost_per_kwh;

    let labor_cost = (inputs.post_processing_minutes / 60.0) * inputs.labor_rate_per_hour;

    let machine_cost = inputs.print_duration_hours * inputs.machine_rate_per_hour;

    let base_subtotal = material_cost + electricity_cost + labor_cost + machine_cost;

    let failure_cost = base_subtotal * (inputs.failure_rate_percent / 100.0);
    let production_subtotal = base_subtotal + failure_cost;

    let profit_amount = production_subtotal * (inputs.profit_margin_percent / 100.0);
    let price_before_tax = policy.apply(production_subtotal + profit_amount);

    let tax_amount = price_before_tax * (inputs.tax_rate_percent / 100.0);
    let final_price = price_before_tax + tax_amount;

    CostBreakdown {
        material_cost,
        electricity_cost,
        labor_cost,
        machine_cost,
        failure_cost,
        production_subtotal,
        profit_amount,
        price_before_tax,
        tax_amount,
        final_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    /// Inputs whose four base costs sum to exactly 100
    fn base_100_inputs() -> CostInputs {
        CostInputs {
            material_price_per_kg: 400.0,
            part_mass_grams: 250.0,
            failure_rate_percent: 10.0,
            profit_margin_percent: 100.0,
            tax_rate_percent: 16.0,
            ..Default::default()
        }
    }

    // ==========================================
    // Base cost components
    // ==========================================

    #[test]
    fn test_material_cost_per_kg_conversion() {
        // 120g at 400/kg = 48
        let inputs = CostInputs {
            material_price_per_kg: 400.0,
            part_mass_grams: 120.0,
            ..Default::default()
        };
        let breakdown = estimate_cost(&inputs);
        assert!((breakdown.material_cost - 48.0).abs() < EPS);
    }

    #[test]
    fn test_electricity_cost_kwh_conversion() {
        // 150W for 4h = 0.6 kWh at 2.5 = 1.5
        let inputs = CostInputs {
            power_rating_watts: 150.0,
            print_duration_hours: 4.0,
            energy_cost_per_kwh: 2.5,
            ..Default::default()
        };
        let breakdown = estimate_cost(&inputs);
        assert!((breakdown.electricity_cost - 1.5).abs() < EPS);
    }

    #[test]
    fn test_labor_cost_minute_conversion() {
        // 15 min at 50/h = 12.5
        let inputs = CostInputs {
            post_processing_minutes: 15.0,
            labor_rate_per_hour: 50.0,
            ..Default::default()
        };
        let breakdown = estimate_cost(&inputs);
        assert!((breakdown.labor_cost - 12.5).abs() < EPS);
    }

    #[test]
    fn test_machine_cost() {
        let inputs = CostInputs {
            print_duration_hours: 3.5,
            machine_rate_per_hour: 10.0,
            ..Default::default()
        };
        let breakdown = estimate_cost(&inputs);
        assert!((breakdown.machine_cost - 35.0).abs() < EPS);
    }

    // ==========================================
    // Percentage layering order
    // ==========================================

    #[test]
    fn test_percentage_layering_literals() {
        // base 100 -> failure 10% -> 110 -> margin 100% -> 220 -> tax 16% -> 255.2
        let breakdown = estimate_cost(&base_100_inputs());
        assert!((breakdown.failure_cost - 10.0).abs() < EPS);
        assert!((breakdown.production_subtotal - 110.0).abs() < EPS);
        assert!((breakdown.profit_amount - 110.0).abs() < EPS);
        assert!((breakdown.price_before_tax - 220.0).abs() < EPS);
        assert!((breakdown.tax_amount - 35.2).abs() < 1e-6);
        assert!((breakdown.final_price - 255.2).abs() < 1e-6);
    }

    #[test]
    fn test_layering_is_compounded_not_flat() {
        // Compounded: 100 * 1.1 * 2.0 * 1.16 = 255.2
        // A flat sum of the percentages (100 * (1 + 1.26)) would be 226.
        let breakdown = estimate_cost(&base_100_inputs());
        assert!((breakdown.final_price - 255.2).abs() < 1e-6);
        assert!((breakdown.final_price - 226.0).abs() > 1.0);
    }

    // ==========================================
    // Zero and identity cases
    // ==========================================

    #[test]
    fn test_zero_inputs_yield_zero_price() {
        // Percentages alone produce nothing without base costs
        let inputs = CostInputs {
            failure_rate_percent: 10.0,
            profit_margin_percent: 300.0,
            tax_rate_percent: 16.0,
            ..Default::default()
        };
        let breakdown = estimate_cost(&inputs);
        assert!((breakdown.final_price - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_duration_is_valid() {
        let inputs = CostInputs {
            material_price_per_kg: 500.0,
            part_mass_grams: 80.0,
            power_rating_watts: 150.0,
            energy_cost_per_kwh: 2.5,
            machine_rate_per_hour: 10.0,
            ..Default::default()
        };
        let breakdown = estimate_cost(&inputs);
        assert!((breakdown.electricity_cost - 0.0).abs() < f64::EPSILON);
        assert!((breakdown.machine_cost - 0.0).abs() < f64::EPSILON);
        assert!((breakdown.material_cost - 40.0).abs() < EPS);
    }

    // ==========================================
    // Monotonicity of cost drivers
    // ==========================================

    #[test]
    fn test_increasing_drivers_never_decrease_price() {
        let base = CostInputs {
            material_price_per_kg: 400.0,
            part_mass_grams: 100.0,
            print_duration_hours: 2.0,
            power_rating_watts: 150.0,
            energy_cost_per_kwh: 2.5,
            post_processing_minutes: 15.0,
            labor_rate_per_hour: 50.0,
            machine_rate_per_hour: 10.0,
            failure_rate_percent: 10.0,
            profit_margin_percent: 100.0,
            tax_rate_percent: 16.0,
        };
        let reference = estimate_cost(&base).final_price;

        let bumped: Vec<CostInputs> = vec![
            CostInputs { part_mass_grams: 150.0, ..base.clone() },
            CostInputs { print_duration_hours: 3.0, ..base.clone() },
            CostInputs { power_rating_watts: 300.0, ..base.clone() },
            CostInputs { energy_cost_per_kwh: 4.0, ..base.clone() },
            CostInputs { post_processing_minutes: 30.0, ..base.clone() },
            CostInputs { labor_rate_per_hour: 80.0, ..base.clone() },
            CostInputs { machine_rate_per_hour: 20.0, ..base.clone() },
        ];

        for inputs in bumped {
            assert!(
                estimate_cost(&inputs).final_price >= reference,
                "raising a cost driver lowered the price: {:?}",
                inputs
            );
        }
    }

    // ==========================================
    // Negative values propagate arithmetically
    // ==========================================

    #[test]
    fn test_negative_margin_reduces_price() {
        let mut inputs = base_100_inputs();
        inputs.profit_margin_percent = -50.0;
        let breakdown = estimate_cost(&inputs);
        // 110 * 0.5 = 55, then 16% tax
        assert!((breakdown.price_before_tax - 55.0).abs() < EPS);
        assert!((breakdown.final_price - 63.8).abs() < 1e-6);
    }

    #[test]
    fn test_nan_input_poisons_result() {
        let mut inputs = base_100_inputs();
        inputs.part_mass_grams = f64::NAN;
        let breakdown = estimate_cost(&inputs);
        assert!(!breakdown.is_finite());
        assert!(breakdown.final_price.is_nan());
    }

    // ==========================================
    // Rounding policy
    // ==========================================

    #[test]
    fn test_ceil_to_step_changes_tax_base() {
        // base 100 -> 110 -> margin 95% -> 214.5 -> ceil to 5 -> 215
        let mut inputs = base_100_inputs();
        inputs.profit_margin_percent = 95.0;

        let exact = estimate_cost(&inputs);
        assert!((exact.price_before_tax - 214.5).abs() < EPS);
        assert!((exact.final_price - 248.82).abs() < 1e-6);

        let rounded = estimate_cost_with_policy(&inputs, RoundingPolicy::CeilToStep(5.0));
        assert!((rounded.price_before_tax - 215.0).abs() < EPS);
        assert!((rounded.tax_amount - 34.4).abs() < 1e-6);
        assert!((rounded.final_price - 249.4).abs() < 1e-6);
    }

    #[test]
    fn test_ceil_to_step_on_exact_multiple_is_identity() {
        let breakdown =
            estimate_cost_with_policy(&base_100_inputs(), RoundingPolicy::CeilToStep(5.0));
        // 220 is already a multiple of 5
        assert!((breakdown.price_before_tax - 220.0).abs() < EPS);
        assert!((breakdown.final_price - 255.2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_step_is_ignored() {
        let exact = estimate_cost(&base_100_inputs());
        let rounded =
            estimate_cost_with_policy(&base_100_inputs(), RoundingPolicy::CeilToStep(0.0));
        assert!((exact.final_price - rounded.final_price).abs() < EPS);
    }

    // ==========================================
    // Duration helper
    // ==========================================

    #[test]
    fn test_duration_from_hours_and_minutes() {
        assert!((duration_hours(2.0, 30.0) - 2.5).abs() < EPS);
        assert!((duration_hours(0.0, 90.0) - 1.5).abs() < EPS);
        assert!((duration_hours(0.0, 0.0) - 0.0).abs() < f64::EPSILON);
    }
}
