//! Cost calculation input and output types

use serde::{Deserialize, Serialize};

/// Inputs to a single cost calculation
///
/// All fields are expected to be non-negative; negative values are not
/// rejected and simply propagate through the arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Spool price per kilogram
    pub material_price_per_kg: f64,
    /// Mass of the piece in grams
    pub part_mass_grams: f64,
    /// Total machine time in hours
    pub print_duration_hours: f64,
    /// Average power draw of the printer in watts
    pub power_rating_watts: f64,
    /// Energy tariff per kWh
    pub energy_cost_per_kwh: f64,
    /// Post-processing time in minutes
    pub post_processing_minutes: f64,
    /// Hourly rate for post-processing labor
    pub labor_rate_per_hour: f64,
    /// Depreciation/maintenance cost per machine-hour
    pub machine_rate_per_hour: f64,
    /// Expected scrap allowance, percent
    pub failure_rate_percent: f64,
    /// Markup, percent
    pub profit_margin_percent: f64,
    /// Sales tax (IVA), percent
    pub tax_rate_percent: f64,
}

/// Layered cost breakdown produced by the estimator
///
/// Failure is applied to the four-cost base, profit to the failure-adjusted
/// subtotal, tax to the profit-adjusted price. Each stage compounds on the
/// previous stage's total, so the fields are not interchangeable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material_cost: f64,
    pub electricity_cost: f64,
    pub labor_cost: f64,
    pub machine_cost: f64,
    pub failure_cost: f64,
    pub production_subtotal: f64,
    pub profit_amount: f64,
    pub price_before_tax: f64,
    pub tax_amount: f64,
    pub final_price: f64,
}

impl CostBreakdown {
    /// True when every field is a finite number
    ///
    /// NaN or infinite inputs poison the whole breakdown; callers should
    /// check before displaying or persisting a result.
    pub fn is_finite(&self) -> bool {
        [
            self.material_cost,
            self.electricity_cost,
            self.labor_cost,
            self.machine_cost,
            self.failure_cost,
            self.production_subtotal,
            self.profit_amount,
            self.price_before_tax,
            self.tax_amount,
            self.final_price,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
